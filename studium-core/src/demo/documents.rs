//! Showcase study documents.

use chrono::{DateTime, TimeZone, Utc};
use studium_model::{
    DifficultyTier, DocumentId, DocumentKind, DocumentRecord, QualityScore,
    Subject, TagSet, Title,
};
use uuid::Uuid;

struct Seed {
    id: u128,
    title: &'static str,
    description: &'static str,
    author: &'static str,
    institution: &'static str,
    subject: Subject,
    kind: DocumentKind,
    pages: u32,
    difficulty: u8,
    rating: f32,
    downloads: u64,
    comments: u32,
    uploaded: (i32, u32, u32),
    tags: &'static [&'static str],
    premium: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        title: "Advanced Machine Learning Algorithms",
        description: "Comprehensive notes covering neural networks, deep learning, and reinforcement learning concepts.",
        author: "Dr. Sarah Chen",
        institution: "MIT",
        subject: Subject::ComputerScience,
        kind: DocumentKind::LectureNotes,
        pages: 89,
        difficulty: 4,
        rating: 4.8,
        downloads: 1247,
        comments: 23,
        uploaded: (2024, 12, 1),
        tags: &["AI", "Neural Networks", "Deep Learning"],
        premium: false,
    },
    Seed {
        id: 2,
        title: "Organic Chemistry Lab Manual",
        description: "Complete lab procedures and safety guidelines for organic chemistry experiments.",
        author: "Prof. Michael Johnson",
        institution: "Harvard University",
        subject: Subject::Chemistry,
        kind: DocumentKind::LabReport,
        pages: 156,
        difficulty: 3,
        rating: 4.6,
        downloads: 856,
        comments: 17,
        uploaded: (2024, 11, 28),
        tags: &["Organic Chemistry", "Laboratory", "Experiments"],
        premium: true,
    },
    Seed {
        id: 3,
        title: "Calculus II Practice Problems",
        description: "Collection of practice problems with detailed solutions for integration techniques.",
        author: "Dr. Emily Rodriguez",
        institution: "Stanford University",
        subject: Subject::Mathematics,
        kind: DocumentKind::PracticeExam,
        pages: 67,
        difficulty: 3,
        rating: 4.9,
        downloads: 2134,
        comments: 45,
        uploaded: (2024, 12, 3),
        tags: &["Calculus", "Integration", "Problem Solving"],
        premium: false,
    },
    Seed {
        id: 4,
        title: "Introduction to Psychology Study Guide",
        description: "Comprehensive study guide covering major psychological theories and research methods.",
        author: "Dr. Alex Thompson",
        institution: "Yale University",
        subject: Subject::Psychology,
        kind: DocumentKind::StudyGuide,
        pages: 234,
        difficulty: 2,
        rating: 4.7,
        downloads: 1689,
        comments: 31,
        uploaded: (2024, 11, 25),
        tags: &["Psychology", "Research Methods", "Theories"],
        premium: false,
    },
    Seed {
        id: 5,
        title: "Quantum Physics Lecture Series",
        description: "Video lectures covering quantum mechanics fundamentals and advanced topics.",
        author: "Prof. David Wilson",
        institution: "Cambridge University",
        subject: Subject::Physics,
        kind: DocumentKind::VideoLecture,
        pages: 0,
        difficulty: 5,
        rating: 4.9,
        downloads: 934,
        comments: 28,
        uploaded: (2024, 12, 2),
        tags: &["Quantum Physics", "Mechanics", "Advanced"],
        premium: true,
    },
    Seed {
        id: 6,
        title: "Financial Economics Textbook Chapter",
        description: "Chapter on portfolio theory and risk management in financial markets.",
        author: "Prof. Lisa Chang",
        institution: "Oxford University",
        subject: Subject::Economics,
        kind: DocumentKind::TextbookChapter,
        pages: 78,
        difficulty: 4,
        rating: 4.5,
        downloads: 567,
        comments: 12,
        uploaded: (2024, 11, 30),
        tags: &["Finance", "Portfolio Theory", "Risk Management"],
        premium: false,
    },
];

fn date(parts: (i32, u32, u32)) -> DateTime<Utc> {
    let (year, month, day) = parts;
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("fixture timestamp")
}

pub(super) fn records() -> Vec<DocumentRecord> {
    SEEDS
        .iter()
        .map(|seed| DocumentRecord {
            id: DocumentId::from_uuid(Uuid::from_u128(seed.id)),
            title: Title::new(seed.title).expect("fixture title"),
            description: seed.description.to_string(),
            author: seed.author.to_string(),
            institution: seed.institution.to_string(),
            subject: seed.subject,
            kind: seed.kind,
            pages: seed.pages,
            difficulty: DifficultyTier::new(seed.difficulty).expect("fixture tier"),
            rating: QualityScore::new(seed.rating).expect("fixture rating"),
            downloads: seed.downloads,
            comments: seed.comments,
            uploaded_at: date(seed.uploaded),
            tags: TagSet::new(seed.tags.iter().copied()),
            premium: seed.premium,
        })
        .collect()
}
