//! Showcase study lists.

use chrono::{DateTime, TimeZone, Utc};
use studium_model::{StudyListId, StudyListRecord, Subject, TagSet, Title};
use uuid::Uuid;

struct Seed {
    id: u128,
    title: &'static str,
    description: &'static str,
    owner: &'static str,
    subject: Subject,
    members: u64,
    documents: u32,
    likes: u32,
    views: u64,
    created: (i32, u32, u32),
    tags: &'static [&'static str],
    public: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: "Machine Learning Fundamentals",
        description: "Essential resources for understanding ML algorithms, neural networks, and deep learning concepts.",
        owner: "Dr. Sarah Chen",
        subject: Subject::ComputerScience,
        members: 47,
        documents: 23,
        likes: 156,
        views: 892,
        created: (2024, 11, 15),
        tags: &["Machine Learning", "AI", "Neural Networks"],
        public: true,
    },
    Seed {
        id: 2,
        title: "Organic Chemistry Study Group",
        description: "Collaborative study materials for organic chemistry including lab procedures and reaction mechanisms.",
        owner: "Prof. Michael Johnson",
        subject: Subject::Chemistry,
        members: 34,
        documents: 18,
        likes: 89,
        views: 445,
        created: (2024, 11, 20),
        tags: &["Organic Chemistry", "Lab", "Reactions"],
        public: true,
    },
    Seed {
        id: 3,
        title: "Calculus II Problem Sets",
        description: "Curated collection of practice problems with detailed solutions for integration techniques.",
        owner: "Dr. Emily Rodriguez",
        subject: Subject::Mathematics,
        members: 78,
        documents: 31,
        likes: 234,
        views: 1203,
        created: (2024, 11, 10),
        tags: &["Calculus", "Integration", "Problem Solving"],
        public: true,
    },
    Seed {
        id: 4,
        title: "Psychology Research Methods",
        description: "Resources for understanding statistical analysis and research design in psychology.",
        owner: "Dr. Alex Thompson",
        subject: Subject::Psychology,
        members: 15,
        documents: 12,
        likes: 67,
        views: 289,
        created: (2024, 11, 25),
        tags: &["Research Methods", "Statistics", "SPSS"],
        public: false,
    },
];

fn date(parts: (i32, u32, u32)) -> DateTime<Utc> {
    let (year, month, day) = parts;
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture timestamp")
}

pub(super) fn records() -> Vec<StudyListRecord> {
    SEEDS
        .iter()
        .map(|seed| StudyListRecord {
            id: StudyListId::from_uuid(Uuid::from_u128(seed.id)),
            title: Title::new(seed.title).expect("fixture title"),
            description: seed.description.to_string(),
            owner: seed.owner.to_string(),
            subject: seed.subject,
            members: seed.members,
            documents: seed.documents,
            likes: seed.likes,
            views: seed.views,
            created_at: date(seed.created),
            tags: TagSet::new(seed.tags.iter().copied()),
            public: seed.public,
        })
        .collect()
}
