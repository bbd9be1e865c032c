//! Static marketing content for the home screen.

pub const PRODUCT_NAME: &str = "LinguaConnect";
pub const TAGLINE: &str = "Connect with 50M+ language learners worldwide";
pub const HEADLINE: &str = "Learn Languages Through Real Connections";
pub const BLURB: &str = "Join the world's most vibrant language learning community. Practice with native \
speakers, explore cultures on our interactive map, and communicate seamlessly with real-time translation.";

pub const CALL_TO_ACTION: &str = "Ready to Start Your Language Journey?";
pub const CALL_TO_ACTION_DETAIL: &str = "Join millions of learners connecting across cultures and languages.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "50M+", label: "Active Learners" },
    Stat { value: "150+", label: "Languages" },
    Stat { value: "200+", label: "Countries" },
    Stat { value: "24/7", label: "Live Chat" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Interactive World Map",
        description: "Discover language partners from around the globe. See where your conversation partners are located in real-time.",
    },
    Feature {
        title: "Real-Time Translation",
        description: "Break language barriers instantly with AI-powered translation that works across text, voice, and video calls.",
    },
    Feature {
        title: "Video & Voice Chat",
        description: "Practice pronunciation and conversation skills through high-quality video and voice calls with native speakers.",
    },
    Feature {
        title: "Smart Messaging",
        description: "Chat with built-in grammar correction, vocabulary suggestions, and cultural context tips.",
    },
    Feature {
        title: "Community Groups",
        description: "Join language-specific communities, participate in cultural exchanges, and make lifelong friendships.",
    },
    Feature {
        title: "Cultural Exchange",
        description: "Learn about different cultures, traditions, and customs while improving your language skills.",
    },
];
