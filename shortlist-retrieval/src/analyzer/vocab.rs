//! Fixed keyword vocabularies for hiring-intent analysis.
//!
//! Matching is substring containment against the lowercased query, so
//! multi-word phrases like "machine learning" match as written.

/// Technical skill phrases, curated for the hiring domain.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "java",
    "python",
    "javascript",
    "sql",
    "c++",
    "c#",
    "php",
    "ruby",
    "programming",
    "coding",
    "software",
    "developer",
    "engineer",
    "database",
    "web",
    "mobile",
    "cloud",
    "api",
    "devops",
    "machine learning",
    "ai",
    "data",
    "algorithm",
    "testing",
];

/// Behavioral/soft skill phrases.
pub const BEHAVIORAL_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "collaboration",
    "teamwork",
    "interpersonal",
    "personality",
    "behavioral",
    "people",
    "management",
    "organizational",
    "problem solving",
    "critical thinking",
    "creativity",
    "emotional intelligence",
    "negotiation",
    "conflict",
    "customer service",
    "sales",
    "time management",
    "decision making",
];
