use std::collections::BTreeSet;

use crate::types::internal::UserRecord;

pub const SUPER_ADMIN_ROLE: &str = "Super Admin";

/// Broad grouping of roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCategory {
    Employee,
    Freelancer,
    Intern,
    Management,
    Admin,
    SuperAdmin,
}

impl UserCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Freelancer => "freelancer",
            Self::Intern => "intern",
            Self::Management => "management",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

/// Defaults attached to a predefined role
#[derive(Debug)]
pub struct RoleProfile {
    pub role: &'static str,
    pub category: UserCategory,
    pub department: Option<&'static str>,
    pub dashboards: &'static [&'static str],
}

static PREDEFINED_ROLES: &[RoleProfile] = &[
    RoleProfile {
        role: "SEO",
        category: UserCategory::Employee,
        department: Some("Marketing"),
        dashboards: &["seo_dashboard", "employee_dashboard", "profile"],
    },
    RoleProfile {
        role: "Ads",
        category: UserCategory::Employee,
        department: Some("Marketing"),
        dashboards: &["ads_dashboard", "employee_dashboard", "profile"],
    },
    RoleProfile {
        role: "Social Media",
        category: UserCategory::Employee,
        department: Some("Marketing"),
        dashboards: &["social_dashboard", "employee_dashboard", "profile"],
    },
    RoleProfile {
        role: "YouTube SEO",
        category: UserCategory::Employee,
        department: Some("Marketing"),
        dashboards: &["youtube_dashboard", "employee_dashboard", "profile"],
    },
    RoleProfile {
        role: "Web Developer",
        category: UserCategory::Employee,
        department: Some("Technology"),
        dashboards: &["dev_dashboard", "employee_dashboard", "profile"],
    },
    RoleProfile {
        role: "Graphic Designer",
        category: UserCategory::Employee,
        department: Some("Creative"),
        dashboards: &["design_dashboard", "employee_dashboard", "profile"],
    },
    RoleProfile {
        role: "Freelancer",
        category: UserCategory::Freelancer,
        department: None,
        dashboards: &["freelancer_dashboard", "profile"],
    },
    RoleProfile {
        role: "Intern",
        category: UserCategory::Intern,
        department: None,
        dashboards: &["intern_dashboard", "profile"],
    },
    RoleProfile {
        role: "Operations Head",
        category: UserCategory::Management,
        department: Some("Operations"),
        dashboards: &["operations_dashboard", "management_dashboard", "profile"],
    },
    RoleProfile {
        role: "Accountant",
        category: UserCategory::Admin,
        department: Some("Finance"),
        dashboards: &["accounting_dashboard", "admin_dashboard", "profile"],
    },
    RoleProfile {
        role: "Sales",
        category: UserCategory::Admin,
        department: Some("Sales"),
        dashboards: &["sales_dashboard", "admin_dashboard", "profile"],
    },
    RoleProfile {
        role: "HR",
        category: UserCategory::Admin,
        department: Some("Human Resources"),
        dashboards: &["hr_dashboard", "admin_dashboard", "profile"],
    },
    RoleProfile {
        role: SUPER_ADMIN_ROLE,
        category: UserCategory::SuperAdmin,
        department: Some("Administration"),
        dashboards: &["super_admin_dashboard", "all_dashboards", "profile"],
    },
];

/// Look up the predefined profile for a role label (exact match)
pub fn role_profile(role: &str) -> Option<&'static RoleProfile> {
    PREDEFINED_ROLES.iter().find(|p| p.role == role)
}

/// Landing route for a role
pub fn dashboard_route(role: &str) -> &'static str {
    match role {
        SUPER_ADMIN_ROLE => "/super-admin",
        "Operations Head" | "Manager" | "HR" | "Accountant" | "Sales" => "/admin",
        "SEO" | "Ads" | "Social Media" | "YouTube SEO" | "Web Developer" | "Graphic Designer"
        | "Freelancer" | "Intern" => "/employee",
        "Client" => "/client",
        _ => "/dashboard",
    }
}

/// Dashboards the user may open: the stored set when present, else the role's defaults
pub fn effective_dashboard_access(user: &UserRecord) -> BTreeSet<String> {
    if !user.dashboard_access.is_empty() {
        return user.dashboard_access.clone();
    }

    role_profile(&user.role)
        .map(|p| p.dashboards.iter().map(|d| d.to_string()).collect())
        .unwrap_or_default()
}

/// Whether `user` may open `dashboard`. Super Admin may open everything.
pub fn has_dashboard_access(user: &UserRecord, dashboard: &str) -> bool {
    if user.role == SUPER_ADMIN_ROLE {
        return true;
    }
    effective_dashboard_access(user).contains(dashboard)
}
