//! Fixed sample data loaded at board initialization. This is the only
//! source of conversations and the initial job catalogs; user actions only
//! ever add to it.

use crate::models::conversation::{Conversation, Message};
use crate::models::job::{AppliedJob, ApplicationStatus, Job};
use crate::models::role::Role;

pub struct BoardSeed {
    pub jobs: Vec<Job>,
    pub applied: Vec<AppliedJob>,
    pub conversations: Vec<Conversation>,
}

fn job(
    id: &str,
    title: &str,
    description: &str,
    budget: &str,
    posted_at: &str,
    poster: &str,
    applicants: u32,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        budget: budget.to_string(),
        posted_at: posted_at.to_string(),
        poster: poster.to_string(),
        applicants,
        applied: false,
    }
}

fn message(id: &str, sender: Role, text: &str, time: &str) -> Message {
    Message {
        id: id.to_string(),
        sender,
        text: text.to_string(),
        time: time.to_string(),
    }
}

fn conversation(id: &str, counterparty: &str, job_title: &str, messages: Vec<Message>) -> Conversation {
    Conversation {
        id: id.to_string(),
        counterparty: counterparty.to_string(),
        job_title: job_title.to_string(),
        messages,
    }
}

/// Open jobs, two pre-existing applications and two chat threads for the
/// freelancer view.
pub fn freelancer_board() -> BoardSeed {
    let jobs = vec![
        job(
            "1",
            "Web Developer Needed",
            "Looking for a skilled React developer for a 3-month project. Must have experience with TypeScript and Tailwind CSS.",
            "$5,000",
            "2 days ago",
            "TechCorp Inc.",
            0,
        ),
        job(
            "2",
            "UI/UX Designer",
            "Need a designer to redesign our mobile app interface. Experience with Figma required.",
            "$3,000",
            "1 week ago",
            "Design Studio",
            0,
        ),
        job(
            "3",
            "Content Writer",
            "Looking for a content writer for blog posts and marketing materials.",
            "$1,500",
            "3 days ago",
            "Marketing Agency",
            0,
        ),
        job(
            "4",
            "Data Analyst",
            "Need a data analyst to help with business intelligence and reporting.",
            "$4,000",
            "5 days ago",
            "Analytics Co.",
            0,
        ),
    ];

    let applied = vec![
        AppliedJob {
            id: "5".to_string(),
            title: "Mobile App Developer".to_string(),
            description: "Build a cross-platform mobile app using React Native.".to_string(),
            budget: "$8,000".to_string(),
            posted_at: "2 weeks ago".to_string(),
            poster: "App Startup".to_string(),
            status: ApplicationStatus::Pending,
            applied_at: "1 week ago".to_string(),
        },
        AppliedJob {
            id: "6".to_string(),
            title: "Backend Engineer".to_string(),
            description: "Develop REST APIs using Node.js and PostgreSQL.".to_string(),
            budget: "$6,000".to_string(),
            posted_at: "3 weeks ago".to_string(),
            poster: "Tech Solutions".to_string(),
            status: ApplicationStatus::Accepted,
            applied_at: "2 weeks ago".to_string(),
        },
    ];

    let conversations = vec![
        conversation(
            "1",
            "TechCorp Inc.",
            "Web Developer Needed",
            vec![
                message("1", Role::Institution, "Hi! We reviewed your application.", "10:30 AM"),
                message(
                    "2",
                    Role::Freelancer,
                    "Great! I'm excited about this opportunity.",
                    "10:35 AM",
                ),
            ],
        ),
        conversation(
            "2",
            "Tech Solutions",
            "Backend Engineer",
            vec![
                message(
                    "1",
                    Role::Institution,
                    "Congratulations! You've been selected.",
                    "Yesterday",
                ),
                message("2", Role::Freelancer, "Thank you! When can we start?", "Yesterday"),
            ],
        ),
    ];

    BoardSeed {
        jobs,
        applied,
        conversations,
    }
}

/// The institution's own postings and its chat threads with applicants.
pub fn institution_board(poster: &str) -> BoardSeed {
    let jobs = vec![
        job(
            "1",
            "Web Developer Needed",
            "Looking for a skilled React developer for a 3-month project.",
            "$5,000",
            "2 days ago",
            poster,
            5,
        ),
        job(
            "2",
            "UI/UX Designer",
            "Need a designer to redesign our mobile app interface.",
            "$3,000",
            "1 week ago",
            poster,
            12,
        ),
        job(
            "3",
            "Content Writer",
            "Looking for a content writer for blog posts and marketing materials.",
            "$1,500",
            "3 days ago",
            poster,
            8,
        ),
        job(
            "4",
            "Data Analyst",
            "Need a data analyst to help with business intelligence and reporting.",
            "$4,000",
            "5 days ago",
            poster,
            3,
        ),
    ];

    let conversations = vec![
        conversation(
            "1",
            "John Doe",
            "Web Developer Needed",
            vec![
                message("1", Role::Freelancer, "Hi, I'm interested in this project!", "10:30 AM"),
                message(
                    "2",
                    Role::Institution,
                    "Great! Can you share your portfolio?",
                    "10:35 AM",
                ),
            ],
        ),
        conversation(
            "2",
            "Jane Smith",
            "UI/UX Designer",
            vec![message(
                "1",
                Role::Freelancer,
                "I have 5 years of experience in UI design.",
                "Yesterday",
            )],
        ),
    ];

    BoardSeed {
        jobs,
        applied: Vec::new(),
        conversations,
    }
}
