use std::fmt;

/// Academic subject a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subject {
    ComputerScience,
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    Psychology,
    Economics,
    Business,
    Literature,
    History,
    Philosophy,
}

impl Subject {
    pub fn all() -> &'static [Subject] {
        use Subject::*;
        &[
            ComputerScience,
            Mathematics,
            Physics,
            Chemistry,
            Biology,
            Psychology,
            Economics,
            Business,
            Literature,
            History,
            Philosophy,
        ]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            Subject::ComputerScience => "Computer Science",
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Psychology => "Psychology",
            Subject::Economics => "Economics",
            Subject::Business => "Business",
            Subject::Literature => "Literature",
            Subject::History => "History",
            Subject::Philosophy => "Philosophy",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

/// Kind of study document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DocumentKind {
    LectureNotes,
    StudyGuide,
    PracticeExam,
    Assignment,
    TextbookChapter,
    VideoLecture,
    LabReport,
}

impl DocumentKind {
    pub fn all() -> &'static [DocumentKind] {
        use DocumentKind::*;
        &[
            LectureNotes,
            StudyGuide,
            PracticeExam,
            Assignment,
            TextbookChapter,
            VideoLecture,
            LabReport,
        ]
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            DocumentKind::LectureNotes => "Lecture Notes",
            DocumentKind::StudyGuide => "Study Guide",
            DocumentKind::PracticeExam => "Practice Exam",
            DocumentKind::Assignment => "Assignment",
            DocumentKind::TextbookChapter => "Textbook Chapter",
            DocumentKind::VideoLecture => "Video Lecture",
            DocumentKind::LabReport => "Lab Report",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
