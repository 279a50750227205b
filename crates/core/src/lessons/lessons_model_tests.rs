//! Tests for lesson models.

#[cfg(test)]
mod tests {
    use crate::lessons::{
        default_lessons, is_passing, quiz_percentage, LessonProgress, LessonStatus,
    };

    #[test]
    fn test_quiz_percentage_rounds_down() {
        assert_eq!(quiz_percentage(2, 2), Some(100));
        assert_eq!(quiz_percentage(2, 3), Some(66));
        assert_eq!(quiz_percentage(0, 3), Some(0));
    }

    #[test]
    fn test_quiz_percentage_rejects_inconsistent_counts() {
        assert_eq!(quiz_percentage(1, 0), None);
        assert_eq!(quiz_percentage(0, 0), None);
        assert_eq!(quiz_percentage(4, 3), None);
    }

    #[test]
    fn test_passing_threshold_is_exact() {
        assert!(is_passing(7, 10));
        assert!(!is_passing(69, 100));
        assert!(!is_passing(2, 3));
        assert!(is_passing(3, 3));
        assert!(!is_passing(0, 0));
    }

    #[test]
    fn test_start_transitions() {
        assert!(LessonStatus::NotStarted.can_start());
        assert!(LessonStatus::Failed.can_start());
        assert!(!LessonStatus::InProgress.can_start());
        assert!(!LessonStatus::Completed.can_start());
        assert_eq!(LessonProgress::default().status, LessonStatus::NotStarted);
    }

    #[test]
    fn test_catalog_has_one_premium_lesson() {
        let lessons = default_lessons();
        assert_eq!(lessons.len(), 3);
        assert_eq!(lessons.iter().filter(|l| l.is_premium).count(), 1);
        for lesson in &lessons {
            assert!(!lesson.quiz.is_empty());
            for question in &lesson.quiz {
                assert_eq!(question.options.iter().filter(|o| o.is_correct).count(), 1);
            }
        }
    }
}
