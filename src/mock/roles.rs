use crate::record::Role;

use super::ids::{IdGenerator, UuidIds};

/// Size of the process-wide mock roles collection.
pub const MOCK_ROLE_COUNT: usize = 200;

pub const ROLE_TYPES: [&str; 10] = [
    "Admin",
    "Manager",
    "Recruiter",
    "Interviewer",
    "Editor",
    "Viewer",
    "Approver",
    "Auditor",
    "Coordinator",
    "Analyst",
];

pub const RESOURCES: [&str; 20] = [
    "Candidates",
    "Jobs",
    "Files",
    "Organizations",
    "Roles",
    "Permissions",
    "Users",
    "Reports",
    "Interviews",
    "Offers",
    "Departments",
    "Locations",
    "Documents",
    "Templates",
    "Notifications",
    "Settings",
    "Dashboards",
    "Pipelines",
    "Skills",
    "Teams",
];

/// Generate `count` roles with random UUID ids.
pub fn generate(count: usize) -> Vec<Role> {
    generate_with(count, &mut UuidIds)
}

/// Generate `count` roles, drawing ids from `ids`.
pub fn generate_with<G: IdGenerator + ?Sized>(count: usize, ids: &mut G) -> Vec<Role> {
    let types = ROLE_TYPES.len();
    let resources = RESOURCES.len();

    (0..count)
        .map(|i| {
            let role_type = ROLE_TYPES[i % types];
            let resource = RESOURCES[(i / types) % resources];
            let counter = i / (types * resources);
            let suffix = if counter > 0 {
                format!(" {}", counter)
            } else {
                String::new()
            };

            Role {
                id: ids.next_id(),
                name: format!("{}:{}{}", role_type, resource, suffix),
                description: format!(
                    "{} role for {} management{}",
                    role_type, resource, suffix
                ),
            }
        })
        .collect()
}
