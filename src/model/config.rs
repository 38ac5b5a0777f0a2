use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Department name → sub-department names, in display order
pub type Tree = IndexMap<String, Vec<String>>;

/// Configuration from docket.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    /// Tree name → tree
    #[serde(default = "default_trees")]
    pub trees: IndexMap<String, Tree>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ui: UiConfig::default(),
            upload: UploadConfig::default(),
            scan: ScanConfig::default(),
            favorites: FavoritesConfig::default(),
            trees: default_trees(),
        }
    }
}

impl AppConfig {
    pub fn tree(&self, name: &str) -> Option<&Tree> {
        self.trees.get(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Accepted file extensions, without the dot
    #[serde(default = "default_accept")]
    pub accept: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        UploadConfig {
            accept: default_accept(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_scan_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            delay_ms: default_scan_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// Document ids favorited at startup
    #[serde(default = "default_initial_favorites")]
    pub initial: Vec<u32>,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        FavoritesConfig {
            initial: default_initial_favorites(),
        }
    }
}

fn default_accept() -> Vec<String> {
    ["pdf", "doc", "docx", "jpg", "jpeg", "png", "tiff"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_scan_delay_ms() -> u64 {
    2000
}

fn default_initial_favorites() -> Vec<u32> {
    vec![1, 3]
}

fn tree(entries: &[(&str, &[&str])]) -> Tree {
    entries
        .iter()
        .map(|(dept, subs)| {
            (
                dept.to_string(),
                subs.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

fn default_trees() -> IndexMap<String, Tree> {
    let mut trees = IndexMap::new();
    trees.insert(
        "departments".to_string(),
        tree(&[
            (
                "Accounting",
                &[
                    "Accounts Payable",
                    "Accounts Receivable",
                    "Tax Documents",
                    "Financial Reports",
                ],
            ),
            (
                "Administration",
                &["Policies", "Procedures", "Office Management", "Facilities"],
            ),
            ("HR", &["Employee Records", "Payroll", "Benefits", "Training"]),
            ("Legal", &["Contracts", "Compliance", "Litigation", "Corporate"]),
            (
                "Marketing",
                &["Campaigns", "Brand Assets", "Analytics", "Content"],
            ),
            (
                "Operations",
                &["SOPs", "Quality", "Vendor Management", "Logistics"],
            ),
            (
                "Sales",
                &[
                    "Proposals",
                    "Presentations",
                    "Customer Records",
                    "Territories",
                ],
            ),
        ]),
    );
    trees.insert(
        "projects".to_string(),
        tree(&[
            ("Website Redesign", &["Requirements", "Design", "Delivery"]),
            ("ERP Migration", &["Planning", "Data Mapping", "Cutover"]),
        ]),
    );
    trees.insert(
        "clients".to_string(),
        tree(&[
            ("ABC Corp", &["Contracts", "Invoices", "Correspondence"]),
            ("Globex", &["Contracts", "Invoices", "Correspondence"]),
        ]),
    );
    trees
}
