use super::aggregate::MajorSummary;

/// What two majors have in common, shown above the side-by-side columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub same_major: bool,
    pub same_category: bool,
    pub same_subject: bool,
}

impl ComparisonSummary {
    pub fn between(left: &MajorSummary, right: &MajorSummary) -> Self {
        Self {
            same_major: left.major_id == right.major_id,
            same_category: left.category_name == right.category_name,
            same_subject: left.subject_id == right.subject_id,
        }
    }

    pub fn headline(&self) -> &'static str {
        if self.same_major {
            "两边是同一个专业"
        } else if self.same_subject {
            "同属一个学科，课程设置高度相近"
        } else if self.same_category {
            "同属一个门类，但学科方向不同"
        } else {
            "分属不同门类"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_major::MajorId;

    fn major(id: &str, category: &str, subject: &str) -> MajorSummary {
        MajorSummary {
            major_id: MajorId::new(id),
            major_name: format!("专业{}", id),
            category_name: category.to_string(),
            subject_id: subject.to_string(),
            subject_name: format!("学科{}", subject),
        }
    }

    #[test]
    fn test_same_subject() {
        let s = ComparisonSummary::between(
            &major("080901", "工学", "0809"),
            &major("080902", "工学", "0809"),
        );
        assert!(!s.same_major);
        assert!(s.same_category && s.same_subject);
        assert_eq!(s.headline(), "同属一个学科，课程设置高度相近");
    }

    #[test]
    fn test_different_categories() {
        let s = ComparisonSummary::between(
            &major("080901", "工学", "0809"),
            &major("120201", "管理学", "1202"),
        );
        assert_eq!(
            s,
            ComparisonSummary {
                same_major: false,
                same_category: false,
                same_subject: false
            }
        );
        assert_eq!(s.headline(), "分属不同门类");
    }

    #[test]
    fn test_same_major() {
        let a = major("080901", "工学", "0809");
        assert!(ComparisonSummary::between(&a, &a.clone()).same_major);
    }
}
