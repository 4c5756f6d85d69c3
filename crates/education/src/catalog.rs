//! Static training-content catalog.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub modules: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceGuide {
    pub title: &'static str,
    pub description: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Quiz {
    pub title: &'static str,
    pub description: &'static str,
    pub questions: u32,
    pub time_limit_minutes: u32,
    pub passing_score_pct: u32,
}

pub fn courses() -> Vec<Course> {
    vec![
        Course {
            title: "Phishing Fundamentals",
            description: "Learn to identify common phishing techniques",
            duration_minutes: 30,
            modules: 5,
            difficulty: Difficulty::Beginner,
        },
        Course {
            title: "Social Engineering Tactics",
            description: "Understanding psychological manipulation in attacks",
            duration_minutes: 45,
            modules: 7,
            difficulty: Difficulty::Intermediate,
        },
        Course {
            title: "Advanced Threat Detection",
            description: "Identifying sophisticated phishing campaigns",
            duration_minutes: 60,
            modules: 8,
            difficulty: Difficulty::Advanced,
        },
    ]
}

pub fn resources() -> Vec<ResourceGuide> {
    vec![
        ResourceGuide {
            title: "Phishing Red Flags Guide",
            description: "Quick reference guide for identifying suspicious emails",
            summary: "A comprehensive checklist of warning signs to look for in potential \
                phishing emails, including examples of real-world phishing attempts.",
        },
        ResourceGuide {
            title: "Security Best Practices",
            description: "Essential security habits for all employees",
            summary: "A guide covering password management, multi-factor authentication, \
                safe browsing habits, and other critical security practices.",
        },
        ResourceGuide {
            title: "Incident Response Playbook",
            description: "What to do if you suspect a phishing attack",
            summary: "Step-by-step instructions for employees to follow when they believe \
                they've encountered a phishing attempt or security incident.",
        },
    ]
}

pub fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            title: "Phishing Identification Quiz",
            description: "Test your ability to spot phishing emails",
            questions: 10,
            time_limit_minutes: 15,
            passing_score_pct: 80,
        },
        Quiz {
            title: "Social Engineering Challenge",
            description: "Identify manipulation tactics in various scenarios",
            questions: 8,
            time_limit_minutes: 12,
            passing_score_pct: 75,
        },
        Quiz {
            title: "Security Policy Assessment",
            description: "Test your knowledge of company security policies",
            questions: 15,
            time_limit_minutes: 20,
            passing_score_pct: 85,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(courses().len(), 3);
        assert_eq!(resources().len(), 3);
        assert_eq!(quizzes().len(), 3);
    }

    #[test]
    fn test_course_difficulty_progression() {
        let courses = courses();
        assert_eq!(courses[0].difficulty, Difficulty::Beginner);
        assert_eq!(courses[2].difficulty, Difficulty::Advanced);
        assert_eq!(courses[2].duration_minutes, 60);
    }

    #[test]
    fn test_quiz_passing_scores() {
        for quiz in quizzes() {
            assert!((1..=100).contains(&quiz.passing_score_pct));
        }
    }
}
