use crate::models::{
    Award, CategoryShowcase, HowItWorksStep, RevealMode, Slide, StatTileDef, Testimonial,
    TitleAnimation,
};

pub const HERO_SLIDES: &[Slide] = &[
    Slide {
        id: 1,
        image_url: "/assets/hero/stage.webp",
        title: Some("Every stage starts somewhere"),
        subtitle: Some("Show the world what you can do, one performance at a time."),
        title_animation: Some(TitleAnimation::Typed),
        subtitle_animation: Some(RevealMode::Word),
    },
    Slide {
        id: 2,
        image_url: "/assets/hero/studio.webp",
        title: Some("Compete. Learn. Shine."),
        subtitle: Some("Open competitions and live workshops for young creators."),
        title_animation: Some(TitleAnimation::Staggered(RevealMode::Letter)),
        subtitle_animation: Some(RevealMode::Word),
    },
    Slide {
        id: 3,
        image_url: "/assets/hero/field.webp",
        title: Some("Found by the people who matter"),
        subtitle: Some("Mentors, scouts and schools browse new talent every day."),
        title_animation: Some(TitleAnimation::Staggered(RevealMode::Word)),
        subtitle_animation: None,
    },
];

pub const STAT_TILES: &[StatTileDef] = &[
    StatTileDef { id: 1, title: "Members", source: "users", icon: "👥", color_class: "stat-blue" },
    StatTileDef { id: 2, title: "Talents", source: "talents", icon: "⭐", color_class: "stat-gold" },
    StatTileDef { id: 3, title: "Categories", source: "categories", icon: "🎨", color_class: "stat-pink" },
    StatTileDef { id: 4, title: "Live competitions", source: "competitions", icon: "🏆", color_class: "stat-green" },
    StatTileDef { id: 5, title: "Upcoming workshops", source: "workshops", icon: "🎓", color_class: "stat-purple" },
    StatTileDef { id: 6, title: "Free resources", source: "resources", icon: "📚", color_class: "stat-teal" },
];

pub const CATEGORIES: &[CategoryShowcase] = &[
    CategoryShowcase {
        id: 1,
        name: "Music",
        description: "Singers, instrumentalists and young composers.",
        icon: "🎹",
        image_url: "/assets/categories/music.webp",
        link: "/talents?search=music",
    },
    CategoryShowcase {
        id: 2,
        name: "Dance",
        description: "From ballet to breaking.",
        icon: "💃",
        image_url: "/assets/categories/dance.webp",
        link: "/talents?search=dance",
    },
    CategoryShowcase {
        id: 3,
        name: "Visual arts",
        description: "Painting, illustration, photography and film.",
        icon: "🎨",
        image_url: "/assets/categories/visual.webp",
        link: "/talents?search=art",
    },
    CategoryShowcase {
        id: 4,
        name: "Sports",
        description: "Athletes building their highlight reel.",
        icon: "⚽",
        image_url: "/assets/categories/sports.webp",
        link: "/talents?search=sports",
    },
    CategoryShowcase {
        id: 5,
        name: "Science & tech",
        description: "Inventors, coders and young researchers.",
        icon: "🔬",
        image_url: "/assets/categories/science.webp",
        link: "/talents?search=science",
    },
    CategoryShowcase {
        id: 6,
        name: "Writing",
        description: "Poets, storytellers and spoken word.",
        icon: "✍️",
        image_url: "/assets/categories/writing.webp",
        link: "/talents?search=writing",
    },
];

pub const AWARDS: &[Award] = &[
    Award { id: 1, title: "Rising Star", description: "Voted by the community each season.", icon: "🌟" },
    Award { id: 2, title: "Mentor's Pick", description: "Chosen by our panel of industry mentors.", icon: "🎖️" },
    Award { id: 3, title: "Most Improved", description: "Celebrating growth between competitions.", icon: "📈" },
];

pub const HOW_IT_WORKS: &[HowItWorksStep] = &[
    HowItWorksStep {
        title: "Create your profile",
        description: "Add your category, a short bio and your best work.",
        icon: "📝",
    },
    HowItWorksStep {
        title: "Enter competitions",
        description: "Pick open challenges that match your craft.",
        icon: "🏁",
    },
    HowItWorksStep {
        title: "Learn from mentors",
        description: "Join live workshops and grab free resources.",
        icon: "🤝",
    },
    HowItWorksStep {
        title: "Get discovered",
        description: "Scouts and schools browse showcased talent every week.",
        icon: "🚀",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        quote: "I uploaded one cello video and three weeks later I was playing at a city festival.",
        name: "Maya, 16",
        role: "Cellist",
        avatar_url: Some("/assets/testimonials/maya.webp"),
    },
    Testimonial {
        id: 2,
        quote: "The workshops gave my son feedback we could never find locally.",
        name: "Daniel R.",
        role: "Parent",
        avatar_url: None,
    },
    Testimonial {
        id: 3,
        quote: "We scout here first. The profiles tell you more than a CV ever could.",
        name: "Priya S.",
        role: "Youth program director",
        avatar_url: Some("/assets/testimonials/priya.webp"),
    },
];
