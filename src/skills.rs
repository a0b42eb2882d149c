use crate::profiles::Skill;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary<'a> {
    pub name: &'a str,
    pub skills: Vec<&'a Skill>,
}

impl CategorySummary<'_> {
    pub fn average(&self) -> f64 {
        if self.skills.is_empty() {
            return 0.0;
        }
        let total = self.skills.iter().map(|s| s.level as f64).sum::<f64>();
        total / self.skills.len() as f64
    }

    pub fn rounded_average(&self) -> i32 {
        self.average().round() as i32
    }

    pub fn width_percent(&self) -> f64 {
        self.average().clamp(0.0, 100.0)
    }
}

/// Groups skills by category, keeping the order categories first appear in.
pub fn group_by_category(skills: &[Skill]) -> Vec<CategorySummary<'_>> {
    let mut groups: Vec<CategorySummary> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|g| g.name == skill.category) {
            Some(group) => group.skills.push(skill),
            None => groups.push(CategorySummary {
                name: &skill.category,
                skills: vec![skill],
            }),
        }
    }
    groups
}

pub fn category_color(category: &str) -> &'static str {
    match category {
        "Frontend" => "bg-red-500",
        "Backend" => "bg-blue-500",
        "Language" | "Programming Languages" => "bg-green-500",
        "Database" => "bg-purple-500",
        "DevOps" => "bg-orange-500",
        "Styling" => "bg-pink-500",
        "API" => "bg-cyan-500",
        "Web Development" => "bg-red-400",
        "Tools & Productivity" => "bg-yellow-500",
        _ => "bg-gray-500",
    }
}

/// Counter that climbs toward a target one step per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    current: i32,
    target: i32,
    step: i32,
}

impl CountUp {
    pub fn new(target: i32) -> Self {
        let target = target.max(0);
        Self {
            current: 0,
            target,
            step: (target / 25).max(1),
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advances once; returns whether more ticks are needed.
    pub fn tick(&mut self) -> bool {
        self.current = (self.current + self.step).min(self.target);
        !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::fixtures::skill;

    #[test]
    fn test_category_average_is_rounded_mean() {
        let skills = [82, 78, 85, 70, 75]
            .into_iter()
            .enumerate()
            .map(|(i, level)| skill(&format!("s{i}"), level, "Database"))
            .collect::<Vec<_>>();
        let groups = group_by_category(&skills);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].average(), 78.0);
        assert_eq!(groups[0].rounded_average(), 78);
    }

    #[test]
    fn test_groups_keep_first_appearance_order() {
        let skills = vec![
            skill("Python", 90, "Languages"),
            skill("React", 92, "Web"),
            skill("Java", 85, "Languages"),
            skill("MySQL", 85, "Database"),
            skill("Node", 87, "Web"),
        ];
        let groups = group_by_category(&skills);
        let names = groups.iter().map(|g| g.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Languages", "Web", "Database"]);
        assert_eq!(groups[0].average(), 87.5);
        assert_eq!(groups[0].rounded_average(), 88);
        assert_eq!(groups[1].rounded_average(), 90);
    }

    #[test]
    fn test_embedded_profile_averages() {
        let profile = crate::profiles::get_profile("aayush").expect("aayush should exist");
        let groups = group_by_category(&profile.skills);
        let database = groups
            .iter()
            .find(|g| g.name == "Database")
            .expect("aayush has database skills");
        // (85 + 82 + 80) / 3
        assert_eq!(database.rounded_average(), 82);
    }

    #[test]
    fn test_unknown_category_color_falls_back() {
        assert_eq!(category_color("Frontend"), "bg-red-500");
        assert_eq!(category_color("Knitting"), "bg-gray-500");
    }

    #[test]
    fn test_count_up_reaches_target_and_stops() {
        let mut counter = CountUp::new(78);
        let mut ticks = 0;
        while counter.tick() {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(counter.current(), 78);
        assert!(counter.is_done());
        assert!(!counter.tick());
        assert_eq!(counter.current(), 78);
    }

    #[test]
    fn test_count_up_negative_target() {
        let counter = CountUp::new(-10);
        assert!(counter.is_done());
        assert_eq!(counter.current(), 0);
    }
}
