use serde::Serialize;

use super::favorites::{DocumentId, FavoriteSet};

/// A document known to the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub department: String,
    pub kind: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// A received document awaiting action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InboxEntry {
    pub id: DocumentId,
    pub sender: String,
    pub status: String,
    pub priority: Priority,
}

/// A sent document and its delivery state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboxEntry {
    pub id: DocumentId,
    pub recipient: String,
    pub delivery: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentEntry {
    pub id: DocumentId,
    pub last_viewed: String,
    pub view_count: u32,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: String,
    pub title: String,
    pub message: String,
    pub sender: String,
    pub time: String,
    pub read: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub title: String,
    pub value: String,
    pub change: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub action: String,
    pub user: String,
    pub document: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportGroup {
    pub category: String,
    pub reports: Vec<String>,
}

/// In-memory sample data every list screen reads from
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub documents: Vec<Document>,
    pub inbox: Vec<InboxEntry>,
    pub outbox: Vec<OutboxEntry>,
    pub recent: Vec<RecentEntry>,
    pub notifications: Vec<Notification>,
    pub stats: Vec<Stat>,
    pub activity: Vec<Activity>,
    pub reports: Vec<ReportGroup>,
}

impl Catalog {
    pub fn document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Catalog documents that are in the favorite set, in id order
    pub fn favorites<'a>(&'a self, favorites: &FavoriteSet) -> Vec<&'a Document> {
        favorites.iter().filter_map(|id| self.document(id)).collect()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn sample() -> Self {
        let documents = vec![
            doc(1, "Invoice_Q4_2024_Final.pdf", "Accounting", "Invoice", "2024-01-15"),
            doc(2, "Employee_Handbook_Update.docx", "HR", "Policy", "2024-01-14"),
            doc(3, "Contract_NewClient_2024.pdf", "Legal", "Contract", "2024-01-13"),
            doc(4, "Marketing_Campaign_Proposal.pptx", "Marketing", "Presentation", "2024-01-12"),
            doc(5, "Audit_Report_2024.xlsx", "Finance", "Report", "2024-01-11"),
            doc(6, "Q4_Financial_Report.pdf", "Accounting", "PDF", "2024-01-10"),
            doc(7, "Employee_Guidelines.docx", "HR", "Word Document", "2024-01-09"),
            doc(8, "Project_Timeline.xlsx", "Operations", "Spreadsheet", "2024-01-08"),
            doc(9, "Client_Presentation.pptx", "Sales", "Presentation", "2024-01-07"),
            doc(10, "Legal_Contract_ABC.pdf", "Legal", "PDF", "2024-01-06"),
            doc(11, "Budget_Proposal_2024.xlsx", "Finance", "Spreadsheet", "2024-01-15"),
            doc(12, "Project_Requirements.docx", "Operations", "Document", "2024-01-14"),
        ];

        let inbox = vec![
            inbox(1, "John Smith", "pending", Priority::High),
            inbox(2, "Sarah Johnson", "review", Priority::Medium),
            inbox(3, "Mike Wilson", "approved", Priority::High),
            inbox(4, "Lisa Chen", "pending", Priority::Low),
            inbox(5, "David Brown", "review", Priority::High),
        ];

        let outbox = vec![
            OutboxEntry {
                id: DocumentId(11),
                recipient: "Finance Team".into(),
                delivery: "delivered".into(),
            },
            OutboxEntry {
                id: DocumentId(12),
                recipient: "Development Team".into(),
                delivery: "processing".into(),
            },
        ];

        let recent = vec![
            recent(6, "2 hours ago", 15, "2.3 MB"),
            recent(7, "1 day ago", 8, "1.1 MB"),
            recent(8, "2 days ago", 12, "856 KB"),
            recent(9, "3 days ago", 6, "4.2 MB"),
            recent(10, "1 week ago", 3, "1.8 MB"),
        ];

        let notifications = vec![
            note(
                "approval",
                "Document approval required",
                "Budget_Proposal_2024.xlsx requires your approval",
                "John Smith",
                "5 minutes ago",
                false,
                Priority::High,
            ),
            note(
                "update",
                "Document updated",
                "Employee_Handbook.docx has been updated with new policies",
                "HR Department",
                "1 hour ago",
                false,
                Priority::Medium,
            ),
            note(
                "completed",
                "Processing completed",
                "Your document scan has been processed and indexed",
                "System",
                "2 hours ago",
                true,
                Priority::Low,
            ),
            note(
                "reminder",
                "Document expiry reminder",
                "Contract_ABC_Corp.pdf expires in 30 days",
                "System",
                "1 day ago",
                true,
                Priority::High,
            ),
            note(
                "shared",
                "Document shared",
                "Project_Timeline.xlsx has been shared with you",
                "Sarah Johnson",
                "2 days ago",
                true,
                Priority::Medium,
            ),
        ];

        let stats = vec![
            stat("Total Documents", "12,847", "+12%"),
            stat("Storage Used", "2.4 TB", "+8%"),
            stat("Active Users", "156", "+5%"),
            stat("Daily Activity", "342", "+18%"),
        ];

        let activity = vec![
            act("Document uploaded", "John Smith", "Invoice_2024_001.pdf", "2 minutes ago"),
            act("Document accessed", "Sarah Johnson", "Contract_ABC_Corp.docx", "5 minutes ago"),
            act("Document archived", "Mike Wilson", "Report_Q3_2024.pdf", "10 minutes ago"),
            act("Permission updated", "Admin", "HR_Policy_v2.doc", "15 minutes ago"),
        ];

        let reports = vec![
            group(
                "Activity Reports",
                &[
                    "Productivity Report",
                    "Audit Instance Report",
                    "Document Summary Report",
                    "Documents Age Report",
                ],
            ),
            group("Transaction Reports", &["Document Transaction Summary Report"]),
            group("Log Reports", &["Document Details Report", "System Report"]),
            group("Structure Reports", &["Tree Information Report"]),
            group(
                "Route Reports",
                &["Documents Route Report", "Overdue Tasks Report"],
            ),
        ];

        Catalog {
            documents,
            inbox,
            outbox,
            recent,
            notifications,
            stats,
            activity,
            reports,
        }
    }
}

fn doc(id: u32, title: &str, department: &str, kind: &str, date: &str) -> Document {
    Document {
        id: DocumentId(id),
        title: title.into(),
        department: department.into(),
        kind: kind.into(),
        date: date.into(),
    }
}

fn inbox(id: u32, sender: &str, status: &str, priority: Priority) -> InboxEntry {
    InboxEntry {
        id: DocumentId(id),
        sender: sender.into(),
        status: status.into(),
        priority,
    }
}

fn recent(id: u32, last_viewed: &str, view_count: u32, size: &str) -> RecentEntry {
    RecentEntry {
        id: DocumentId(id),
        last_viewed: last_viewed.into(),
        view_count,
        size: size.into(),
    }
}

fn note(
    kind: &str,
    title: &str,
    message: &str,
    sender: &str,
    time: &str,
    read: bool,
    priority: Priority,
) -> Notification {
    Notification {
        kind: kind.into(),
        title: title.into(),
        message: message.into(),
        sender: sender.into(),
        time: time.into(),
        read,
        priority,
    }
}

fn stat(title: &str, value: &str, change: &str) -> Stat {
    Stat {
        title: title.into(),
        value: value.into(),
        change: change.into(),
    }
}

fn act(action: &str, user: &str, document: &str, time: &str) -> Activity {
    Activity {
        action: action.into(),
        user: user.into(),
        document: document.into(),
        time: time.into(),
    }
}

fn group(category: &str, reports: &[&str]) -> ReportGroup {
    ReportGroup {
        category: category.into(),
        reports: reports.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let catalog = Catalog::sample();
        let mut ids: Vec<u32> = catalog.documents.iter().map(|d| d.id.0).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.documents.len());
    }

    #[test]
    fn every_list_entry_resolves_to_a_document() {
        let catalog = Catalog::sample();
        for entry in &catalog.inbox {
            assert!(catalog.document(entry.id).is_some());
        }
        for entry in &catalog.outbox {
            assert!(catalog.document(entry.id).is_some());
        }
        for entry in &catalog.recent {
            assert!(catalog.document(entry.id).is_some());
        }
    }

    #[test]
    fn favorites_follow_the_set() {
        let catalog = Catalog::sample();
        let mut favs = FavoriteSet::from_ids([DocumentId(3), DocumentId(1), DocumentId(99)]);
        let titles: Vec<&str> = catalog
            .favorites(&favs)
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Invoice_Q4_2024_Final.pdf", "Contract_NewClient_2024.pdf"]
        );

        favs.toggle(DocumentId(1));
        assert_eq!(catalog.favorites(&favs).len(), 1);
    }

    #[test]
    fn unread_count() {
        assert_eq!(Catalog::sample().unread_notifications(), 2);
    }
}
