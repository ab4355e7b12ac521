//! Static FAQ knowledge base for the resume agent.
//!
//! Matching is plain substring containment on the lower-cased question.
//! Entries are checked in declaration order and the first hit wins, so a
//! short keyword like `"ai"` also fires inside longer words ("email",
//! "maintain"); earlier entries take priority over later ones.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl KnowledgeEntry {
    /// `normalized` must already be lower-cased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }
}

pub const FALLBACK_ANSWER: &str = "I can help with my AI work, hackathons, projects, or consulting. Try asking about AI agents, the restaurant project, or how to book a session.";

pub const PRIMARY_GREETING: &str =
    "Hi! I’m Sani’s resume agent. Ask me about his AI work, hackathons, or projects.";

pub const WIDGET_GREETING: &str =
    "Hi! I’m Sani’s resume agent. Ask me about AI work, hackathons, or projects.";

pub const KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        keywords: &["experience", "background", "summary", "who are you"],
        answer: "I’m Sani (Ehsan Mohajer), a Project Specialist and Full‑Stack Developer based in Central Finland. I connect talent, tech, and business, and I’ve hosted 3 hackathons plus 2 AI hackathons. I currently work at Kehittämisyhtiö Witas Oy and study MSc Full‑Stack Software Development at JAMK (2023–2026).",
    },
    KnowledgeEntry {
        keywords: &["ai", "agent", "automation"],
        answer: "My AI focus is on agentic workflows, automation, and LLM‑powered tools. I design systems that reduce wasted time and energy while keeping humans in the loop.",
    },
    KnowledgeEntry {
        keywords: &["hackathon", "events"],
        answer: "I’ve organized 3 hackathons and 2 AI hackathons in Central Finland, connecting students and local companies through innovation challenges.",
    },
    KnowledgeEntry {
        keywords: &["restaurant", "pizza", "kebab"],
        answer: "The Saaren Pizza & Kebab platform is a full restaurant website with online ordering, real‑time tracking, reservations, email verification, and a bilingual interface built in React 19, TypeScript, and Tailwind CSS.",
    },
    KnowledgeEntry {
        keywords: &["tourism"],
        answer: "I’m currently building a tourism platform for Central Finland that blends storytelling, local business discovery, and smart itinerary planning.",
    },
    KnowledgeEntry {
        keywords: &["book", "consult", "session", "meeting"],
        answer: "You can book a consulting session by filling the form in the Consulting section. I reply with available time slots within 24 hours.",
    },
    KnowledgeEntry {
        keywords: &["contact", "email", "linkedin", "whatsapp"],
        answer: "You can reach me at ehsanmohajer.fi@gmail.com or via LinkedIn and WhatsApp. The Contact section has direct links.",
    },
];

pub fn find_answer(question: &str) -> &'static str {
    find_answer_in(KNOWLEDGE_BASE, question)
}

pub fn find_answer_in(entries: &[KnowledgeEntry], question: &str) -> &'static str {
    let normalized = question.to_lowercase();
    entries
        .iter()
        .find(|entry| entry.matches(&normalized))
        .map(|entry| entry.answer)
        .unwrap_or(FALLBACK_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_of(keyword: &str) -> &'static str {
        KNOWLEDGE_BASE
            .iter()
            .find(|entry| entry.keywords.contains(&keyword))
            .map(|entry| entry.answer)
            .unwrap()
    }

    #[test]
    fn unknown_question_gets_fallback() {
        assert_eq!(find_answer("xyzzy nonsense"), FALLBACK_ANSWER);
        assert_eq!(find_answer(""), FALLBACK_ANSWER);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(
            find_answer("Tell me about the PIZZA place"),
            answer_of("restaurant")
        );
    }

    #[test]
    fn earlier_entry_wins_on_overlap() {
        // "background" (entry 0) beats "hackathon" (entry 2)
        assert_eq!(
            find_answer("What is your background with hackathons?"),
            answer_of("background")
        );
        // "email" contains "ai", so the AI entry beats the contact entry
        assert_eq!(find_answer("What's your email?"), answer_of("agent"));
    }

    #[test]
    fn each_entry_is_reachable_by_its_own_keywords() {
        for (index, entry) in KNOWLEDGE_BASE.iter().enumerate() {
            for keyword in entry.keywords {
                let shadowed = KNOWLEDGE_BASE[..index]
                    .iter()
                    .any(|earlier| earlier.matches(keyword));
                if !shadowed {
                    assert_eq!(find_answer(keyword), entry.answer, "keyword {keyword}");
                }
            }
        }
    }

    #[test]
    fn custom_entries_are_searched_in_order() {
        let entries = [
            KnowledgeEntry {
                keywords: &["rust"],
                answer: "first",
            },
            KnowledgeEntry {
                keywords: &["rust", "cargo"],
                answer: "second",
            },
        ];
        assert_eq!(find_answer_in(&entries, "RUST and cargo"), "first");
        assert_eq!(find_answer_in(&entries, "cargo only"), "second");
        assert_eq!(find_answer_in(&entries, "python"), FALLBACK_ANSWER);
    }
}
