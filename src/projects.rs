use crate::profiles::Project;

pub const TAG_PREVIEW_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Tag(String),
}

impl Category {
    pub fn label(&self) -> &str {
        match self {
            Category::All => "All",
            Category::Tag(tag) => tag,
        }
    }

    /// Form value for a `<select>` option. The wildcard uses the empty
    /// string, which no tag can be.
    pub fn value(&self) -> &str {
        match self {
            Category::All => "",
            Category::Tag(tag) => tag,
        }
    }

    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Category::All
        } else {
            Category::Tag(value)
        }
    }

    fn admits(&self, project: &Project) -> bool {
        match self {
            Category::All => true,
            Category::Tag(tag) => project.tags.iter().any(|t| t == tag),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub query: String,
    pub category: Category,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        self.category.admits(project) && matches_query(project, &self.query)
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category != Category::All
    }
}

fn matches_query(project: &Project, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    project.title.to_lowercase().contains(&query)
        || project.description.to_lowercase().contains(&query)
        || project
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(&query))
}

pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Every distinct tag, in the order it first shows up.
pub fn tag_categories(projects: &[Project]) -> Vec<&str> {
    let mut tags: Vec<&str> = Vec::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(&tag.as_str()) {
            tags.push(tag);
        }
    }
    tags
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPreview<'a> {
    pub shown: &'a [String],
    pub hidden: usize,
}

pub fn tag_preview(project: &Project) -> TagPreview<'_> {
    let shown = &project.tags[..project.tags.len().min(TAG_PREVIEW_LEN)];
    TagPreview {
        shown,
        hidden: project.tags.len() - shown.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::fixtures::project;

    fn sample() -> Vec<Project> {
        vec![
            project(1, "BlueForce", "NGO website", &["React.js", "Node.js", "NGO"]),
            project(2, "Chat", "Real-time messaging", &["WebRTC", "Express"]),
            project(3, "Diet Analysis", "Streamlit dashboards", &["Python", "Node.js"]),
        ]
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_everything() {
        let projects = sample();
        let filtered = filter_projects(&projects, &ProjectFilter::default());
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let projects = sample();
        let by_title = ProjectFilter {
            query: "blueFORCE".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_projects(&projects, &by_title)), vec![1]);

        let by_description = ProjectFilter {
            query: "REAL-TIME".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_projects(&projects, &by_description)), vec![2]);

        let by_tag = ProjectFilter {
            query: "python".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_projects(&projects, &by_tag)), vec![3]);

        let nothing = ProjectFilter {
            query: "cobol".to_string(),
            ..Default::default()
        };
        assert!(filter_projects(&projects, &nothing).is_empty());
    }

    #[test]
    fn test_tag_category_returns_exact_subset() {
        let projects = sample();
        let filter = ProjectFilter {
            query: String::new(),
            category: Category::Tag("Node.js".to_string()),
        };
        assert_eq!(ids(&filter_projects(&projects, &filter)), vec![1, 3]);
    }

    #[test]
    fn test_search_intersects_category() {
        let projects = sample();
        let filter = ProjectFilter {
            query: "streamlit".to_string(),
            category: Category::Tag("Node.js".to_string()),
        };
        assert_eq!(ids(&filter_projects(&projects, &filter)), vec![3]);
        assert!(filter.is_active());
        assert!(!ProjectFilter::default().is_active());
    }

    #[test]
    fn test_tag_named_all_is_selectable() {
        assert_eq!(Category::from_value(""), Category::All);
        assert_eq!(Category::from_value("all"), Category::Tag("all".to_string()));
        let tagged = Category::Tag("all".to_string());
        assert_eq!(Category::from_value(tagged.value()), tagged);
        assert_eq!(Category::from_value(Category::All.value()), Category::All);
    }

    #[test]
    fn test_tag_categories_are_unique() {
        let projects = sample();
        assert_eq!(
            tag_categories(&projects),
            vec!["React.js", "Node.js", "NGO", "WebRTC", "Express", "Python"]
        );
    }

    #[test]
    fn test_tag_preview() {
        let many = project(1, "a", "b", &["1", "2", "3", "4", "5"]);
        let preview = tag_preview(&many);
        assert_eq!(preview.shown.len(), 3);
        assert_eq!(preview.hidden, 2);

        let few = project(2, "a", "b", &["1"]);
        assert_eq!(tag_preview(&few).hidden, 0);
    }
}
