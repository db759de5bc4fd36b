//! In-memory directory backed by the built-in demo dataset.
//!
//! Implements the same query contract as the directory server, so demo
//! mode and tests exercise identical filter semantics.

use async_trait::async_trait;
use jiff::Timestamp;
use once_cell::sync::Lazy;

use crate::directory::{GroupDirectory, GroupPage, GroupQuery, PageInfo};
use crate::error::{GroupdeckError, Result};
use crate::types::GroupRecord;

const DEMO_GROUP_COUNT: usize = 100;
const DEMO_SEED: u64 = 42;

const DEMO_PHONES: &[&str] = &["+91 98765 43210", "+91 91234 56789", "+91 99876 54321"];

const NAME_POOL: &[&str] = &[
    "Family", "Work", "Friends", "School", "College", "Office", "Team", "Project", "Neighbors",
    "Community", "Club", "Alumni", "Students", "Sports", "Fitness", "Running", "Cricket",
    "Football", "Gaming", "Reading", "Music", "Photography", "Cooking", "Travel", "Tech",
    "Developers", "Designers", "Startup", "Marketing", "Finance", "Health", "Wellness",
];

const DESCRIPTOR_POOL: &[&str] = &[
    "Official", "General", "Main", "Core", "Chat", "Discussion", "Updates", "Announcements",
    "Planning", "Support", "Resources", "Social", "Events", "Meetings",
];

const PROJECT_POOL: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Phoenix", "Falcon", "Titan", "Apollo", "Atlas",
    "Quantum", "Nexus", "Matrix", "Sigma", "Omega", "Horizon", "Voyager",
];

const LABEL_POOL: &[&str] = &[
    "Important", "Urgent", "Archive", "Starred", "Personal", "Work", "Family", "Friends",
    "Meeting", "Deadline", "Review", "Follow-up", "Pending", "In Progress", "Support",
    "Development",
];

const DESCRIPTION_POOL: &[&str] = &[
    "A group for collaboration and communication",
    "Discussion forum for technology and business",
    "Updates and announcements about projects",
    "Community focused on learning and development",
    "Sharing experiences and best practices",
    "Collaboration on development projects",
    "Support group for team members",
    "Information hub for industry trends",
];

static DEMO_GROUPS: Lazy<Vec<GroupRecord>> =
    Lazy::new(|| generate_demo_groups(DEMO_GROUP_COUNT));

pub struct MemoryDirectory {
    phones: Vec<String>,
    groups: Vec<GroupRecord>,
}

impl MemoryDirectory {
    /// Directory over the built-in demo dataset.
    pub fn demo() -> Self {
        MemoryDirectory {
            phones: DEMO_PHONES.iter().map(|p| p.to_string()).collect(),
            groups: DEMO_GROUPS.clone(),
        }
    }

    /// Directory over caller-supplied data. Phone ids are assigned from
    /// the position in `phones`, starting at 1.
    pub fn new(phones: Vec<String>, groups: Vec<GroupRecord>) -> Self {
        MemoryDirectory { phones, groups }
    }

    fn resolve_phone_id(&self, number: &str) -> Result<i64> {
        self.phones
            .iter()
            .position(|p| p == number)
            .map(|idx| idx as i64 + 1)
            .ok_or_else(|| GroupdeckError::PhoneNotFound(number.to_string()))
    }
}

fn created_key(record: &GroupRecord) -> Option<Timestamp> {
    record.created_at.parse().ok()
}

#[async_trait]
impl GroupDirectory for MemoryDirectory {
    async fn list_groups(&self, query: &GroupQuery) -> Result<GroupPage> {
        let phone_id = match &query.phone {
            Some(number) => Some(self.resolve_phone_id(number)?),
            None => None,
        };

        let term = query.search.trim().to_lowercase();

        let mut matched: Vec<&GroupRecord> = self
            .groups
            .iter()
            .filter(|record| phone_id.is_none_or(|id| record.phone_id == id))
            .filter(|record| term.is_empty() || record.name.to_lowercase().contains(&term))
            .filter(|record| {
                query.project.is_empty()
                    || record.project.as_deref() == Some(query.project.as_str())
            })
            .filter(|record| query.labels.iter().all(|label| record.labels.contains(label)))
            .collect();

        // Most recent first; ties broken by id so ordering is stable
        matched.sort_by(|a, b| {
            created_key(b)
                .cmp(&created_key(a))
                .then_with(|| b.id.cmp(&a.id))
        });

        let total = matched.len();
        let offset = query.page.saturating_sub(1) * query.page_size;
        let groups: Vec<GroupRecord> = matched
            .into_iter()
            .skip(offset)
            .take(query.page_size)
            .cloned()
            .collect();

        let total_pages = if query.page_size == 0 {
            0
        } else {
            total.div_ceil(query.page_size)
        };

        Ok(GroupPage {
            groups,
            pagination: PageInfo {
                page: query.page,
                page_size: query.page_size,
                total,
                total_pages,
            },
        })
    }

    async fn list_projects(&self) -> Result<Vec<String>> {
        let mut projects: Vec<String> = self
            .groups
            .iter()
            .filter_map(|record| record.project.clone())
            .collect();
        projects.sort();
        projects.dedup();
        Ok(projects)
    }

    async fn list_labels(&self) -> Result<Vec<String>> {
        let mut labels: Vec<String> = Vec::new();
        for record in &self.groups {
            for label in &record.labels {
                if !labels.contains(label) {
                    labels.push(label.clone());
                }
            }
        }
        Ok(labels)
    }

    async fn list_phones(&self) -> Result<Vec<String>> {
        Ok(self.phones.clone())
    }
}

/// Small deterministic generator so demo data is stable run-to-run.
struct DemoRng(u64);

impl DemoRng {
    fn new(seed: u64) -> Self {
        DemoRng(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[(self.next() as usize) % pool.len()]
    }
}

fn timestamp_ago(now: Timestamp, seconds_back: i64) -> String {
    Timestamp::from_second(now.as_second() - seconds_back)
        .unwrap_or(now)
        .to_string()
}

fn generate_demo_groups(count: usize) -> Vec<GroupRecord> {
    let mut rng = DemoRng::new(DEMO_SEED);
    let now = Timestamp::now();
    let mut groups = Vec::with_capacity(count);

    for id in 1..=count as i64 {
        let base = rng.pick(NAME_POOL);
        let descriptor = rng.pick(DESCRIPTOR_POOL);
        let project_word = rng.pick(PROJECT_POOL);

        let name = match rng.next() % 6 {
            0 => format!("{} Group", base),
            1 => format!("{} {}", descriptor, base),
            2 => format!("{} - {}", base, project_word),
            3 => format!("{} {}", project_word, base),
            4 => format!("{} {}", base, descriptor),
            _ => format!("{} {} {}", descriptor, base, project_word),
        };

        let project = if rng.next() % 8 == 0 {
            None
        } else {
            Some(rng.pick(PROJECT_POOL).to_string())
        };

        let label_count = 1 + (rng.next() as usize) % 4;
        let mut available: Vec<&str> = LABEL_POOL.to_vec();
        let mut labels = Vec::with_capacity(label_count);
        for _ in 0..label_count {
            if available.is_empty() {
                break;
            }
            let idx = (rng.next() as usize) % available.len();
            labels.push(available.remove(idx).to_string());
        }

        groups.push(GroupRecord {
            id,
            name,
            description: Some(rng.pick(DESCRIPTION_POOL).to_string()),
            member_count: 5 + (rng.next() % 200) as u32,
            phone_id: 1 + (rng.next() % DEMO_PHONES.len() as u64) as i64,
            created_at: timestamp_ago(now, (rng.next() % (365 * 86_400)) as i64),
            updated_at: timestamp_ago(now, (rng.next() % (30 * 86_400)) as i64),
            is_active: rng.next() % 10 != 0,
            project,
            labels,
        });
    }

    groups
}
