//! Team page grouping and the domain accordion

use crate::catalog::TeamMember;

/// Team members partitioned the way the Team page lays them out
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster<'a> {
    pub faculty: Vec<&'a TeamMember>,
    pub executive: Vec<&'a TeamMember>,
    /// One entry per requested domain, in the requested order, even when empty
    pub domains: Vec<DomainGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainGroup<'a> {
    pub name: &'a str,
    pub members: Vec<&'a TeamMember>,
}

impl<'a> DomainGroup<'a> {
    /// Domain leads come first, otherwise catalog order
    pub fn leads_first(&self) -> Vec<&'a TeamMember> {
        let mut members = self.members.clone();
        members.sort_by_key(|m| !m.is_lead);
        members
    }
}

impl<'a> TeamRoster<'a> {
    pub fn build(members: &'a [TeamMember], domains: &[&'a str]) -> Self {
        let faculty = members.iter().filter(|m| m.is_advisor()).collect();
        let executive = members.iter().filter(|m| m.is_executive()).collect();
        let domains = domains
            .iter()
            .copied()
            .map(|name| DomainGroup {
                name,
                members: members
                    .iter()
                    .filter(|m| !m.is_advisor() && m.domain == Some(name))
                    .collect(),
            })
            .collect();

        Self {
            faculty,
            executive,
            domains,
        }
    }

    pub fn domain(&self, name: &str) -> Option<&DomainGroup<'a>> {
        self.domains.iter().find(|d| d.name == name)
    }
}

/// Which domain panel is expanded; at most one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainAccordion<'a> {
    open: Option<&'a str>,
}

impl<'a> DomainAccordion<'a> {
    pub fn opened(domain: &'a str) -> Self {
        Self { open: Some(domain) }
    }

    pub fn open(&self) -> Option<&'a str> {
        self.open
    }

    pub fn is_open(&self, domain: &str) -> bool {
        self.open == Some(domain)
    }

    /// Clicking the open panel collapses it; clicking another opens that one
    pub fn toggle(&mut self, domain: &'a str) {
        self.open = if self.is_open(domain) {
            None
        } else {
            Some(domain)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::{TEAM_DOMAINS, TEAM_MEMBERS};

    #[test]
    fn test_roster_partition() {
        let roster = TeamRoster::build(TEAM_MEMBERS, TEAM_DOMAINS);

        assert_eq!(roster.faculty.len(), 3);
        let exec: Vec<&str> = roster.executive.iter().map(|m| m.role).collect();
        assert_eq!(exec, vec!["Chairperson", "Vice Chair", "Secretary", "Treasurer"]);

        let sizes: Vec<(&str, usize)> = roster
            .domains
            .iter()
            .map(|d| (d.name, d.members.len()))
            .collect();
        assert_eq!(
            sizes,
            vec![("Web Development", 3), ("AI/ML", 2), ("Hardware/IoT", 0), ("Design", 0)]
        );
    }

    #[test]
    fn test_every_member_lands_somewhere_once() {
        let roster = TeamRoster::build(TEAM_MEMBERS, TEAM_DOMAINS);
        let placed = roster.faculty.len()
            + roster.executive.len()
            + roster.domains.iter().map(|d| d.members.len()).sum::<usize>();
        assert_eq!(placed, TEAM_MEMBERS.len());
    }

    #[test]
    fn test_leads_first() {
        let mut members = TEAM_MEMBERS.to_vec();
        members.swap(7, 8);
        let roster = TeamRoster::build(&members, &["Web Development"]);
        let group = roster.domain("Web Development").unwrap();
        assert_eq!(group.members[0].name, "Fiona Green");
        assert_eq!(group.leads_first()[0].name, "Evan Wright");
    }

    #[test]
    fn test_accordion_toggle() {
        let mut accordion = DomainAccordion::opened("Web Development");
        assert!(accordion.is_open("Web Development"));

        accordion.toggle("AI/ML");
        assert_eq!(accordion.open(), Some("AI/ML"));
        assert!(!accordion.is_open("Web Development"));

        accordion.toggle("AI/ML");
        assert_eq!(accordion.open(), None);
    }
}
