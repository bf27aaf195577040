//! Built-in synonym data.
//!
//! The tables below are the fallback vocabulary used whenever no external
//! catalog is available. Entry order is significant: an alias listed under
//! two canonical names resolves to the first one declared.

/// One canonical subject or course name with its accepted surface forms.
#[derive(Debug, Clone, Copy)]
pub struct Equivalence {
    /// Canonical (lowercase) name.
    pub canonical: &'static str,
    /// Alternative spellings, abbreviations and near-synonyms.
    pub aliases: &'static [&'static str],
}

/// Phrases announcing that a subject was dropped, failed or never taken.
pub static DROPPED: &[&str] = &[
    "dropped",
    "quit",
    "left",
    "failed",
    "gave up",
    "gave in",
    "gave away",
    "stopped",
    "didn't take",
    "did not take",
    "didn't do",
    "did not do",
    "retook",
    "retake",
    "withdrawn",
    "withdrew",
    "withdrew from",
    "was withdrawn",
    "discontinued",
    "discontinued with",
    "stopped taking",
    "never took",
    "didn't finish",
    "did not finish",
    "wasn't entered for",
    "not entered for",
    "didn't sit",
    "did not sit",
    "removed",
    "removed from timetable",
    "excluded",
    "scrapped",
    "scrapped off",
    "resigned from",
    "didn't pass",
    "did not pass",
    "didn't complete",
    "did not complete",
    "unregistered",
    "opted out",
    "eliminated",
    "switched out",
    "was switched out",
    "cancelled",
    "dropped out",
    "let go",
    "lost",
    "missed",
    "abandoned",
    "didn't carry forward",
    "did not carry forward",
];

/// Phrases announcing interest in a degree course.
pub static INTEREST: &[&str] = &[
    "interested in",
    "want to apply for",
    "want to apply to",
    "applying for",
    "applying to",
    "looking into",
    "looking at",
    "hoping to study",
    "hoping for",
    "considering",
    "planning to study",
    "thinking about",
    "thinking of",
    "wish to study",
    "aiming for",
    "want to pursue",
    "intend to study",
    "intent to study",
    "wish to apply for",
    "wish to apply to",
    "hope to do",
    "curious about",
    "planning on",
    "searching for",
    "looking for",
    "looking forward to",
    "would like to study",
    "studying",
    "study",
    "i want to study",
    "i hope to study",
    "i'm interested in",
    "keen on",
    "apply for",
    "apply to",
    "would love to study",
    "prefer to study",
    "desire to study",
];

/// Phrases meaning "no subject at all" when they follow a drop phrase.
pub static NONE: &[&str] = &[
    "nothing",
    "none",
    "n/a",
    "nil",
    "zero",
    "no subject",
    "no subjects",
    "not any",
    "not a single",
    "not one",
    "all",
    "didn't drop any",
    "did not drop any",
    "didn't drop anything",
    "did not drop anything",
    "haven't dropped any",
    "haven't dropped anything",
    "never dropped any",
    "never dropped anything",
    "didn't leave any",
    "did not leave any",
    "left none",
    "left nothing",
    "nope",
    "no course",
    "no courses",
    "no class",
    "no classes",
    "not applicable",
    "not relevant",
    "didn't quit any",
    "did not quit any",
    "didn't quit anything",
    "did not quit anything",
    "haven't quit any",
    "haven't quit anything",
    "never quit any",
    "never quit anything",
    "didn't fail any",
    "did not fail any",
    "didn't fail anything",
    "did not fail anything",
    "not dropped",
    "not left",
    "not failed",
    "not quit",
    "all kept",
    "kept all",
    "retained all",
    "none dropped",
];

/// A-level (and equivalent) subjects.
pub static SUBJECTS: &[Equivalence] = &[
    // Science & maths
    Equivalence {
        canonical: "mathematics",
        aliases: &[
            "math",
            "maths",
            "mathematics",
            "core maths",
            "pure maths",
            "stats",
            "statistics",
            "mechanics",
            "applied maths",
            "decision maths",
        ],
    },
    Equivalence {
        canonical: "further mathematics",
        aliases: &[
            "further mathematics",
            "further math",
            "further maths",
            "further-math",
            "f.maths",
            "f.math",
            "fmaths",
            "fmath",
            "furthermaths",
            "furthermath",
            "f maths",
            "f math",
            "fm",
        ],
    },
    Equivalence {
        canonical: "biology",
        aliases: &["biology", "bio", "biological sciences"],
    },
    Equivalence {
        canonical: "chemistry",
        aliases: &[
            "chemistry",
            "chem",
            "applied chemistry",
            "organic chemistry",
            "inorganic chemistry",
        ],
    },
    Equivalence {
        canonical: "physics",
        aliases: &["physics", "phys", "applied physics", "astro physics", "astrophysics"],
    },
    Equivalence {
        canonical: "computer science",
        aliases: &[
            "cs",
            "comp sci",
            "computing",
            "computer science",
            "information technology",
            "it",
            "ict",
            "informatics",
            "information systems",
            "information tech",
            "comp",
            "computers",
        ],
    },
    // English & humanities
    Equivalence {
        canonical: "english literature",
        aliases: &[
            "english literature",
            "lit",
            "english lit",
            "literature",
            "literary studies",
            "eng lit",
        ],
    },
    Equivalence {
        canonical: "english language",
        aliases: &[
            "english language",
            "english lang",
            "eng lang",
            "lang",
            "language",
            "english studies",
        ],
    },
    Equivalence {
        canonical: "history",
        aliases: &["history", "hist", "world history", "ancient history", "modern history"],
    },
    Equivalence {
        canonical: "geography",
        aliases: &["geography", "geo", "physical geography", "human geography", "geog"],
    },
    Equivalence {
        canonical: "philosophy",
        aliases: &[
            "philosophy",
            "phil",
            "philosophy and ethics",
            "religious studies",
            "rs",
            "ethics",
        ],
    },
    Equivalence {
        canonical: "classical civilisation",
        aliases: &["classical civilisation"],
    },
    // Business & econ
    Equivalence {
        canonical: "business",
        aliases: &[
            "business",
            "business studies",
            "biz",
            "bs",
            "business admin",
            "business administration",
            "commerce",
        ],
    },
    Equivalence {
        canonical: "economics",
        aliases: &["economics", "econ", "microeconomics", "macroeconomics"],
    },
    Equivalence {
        canonical: "accounting",
        aliases: &["accounting", "accountancy", "finance", "financial studies"],
    },
    // Social science / law
    Equivalence {
        canonical: "psychology",
        aliases: &["psychology", "psych", "applied psychology"],
    },
    Equivalence {
        canonical: "sociology",
        aliases: &["sociology", "socio", "social studies", "social science"],
    },
    Equivalence {
        canonical: "criminology",
        aliases: &["criminology", "crime", "crime science", "criminal justice", "criminal studies"],
    },
    Equivalence {
        canonical: "law",
        aliases: &["law", "legal studies", "criminal law", "public law", "constitutional law"],
    },
    Equivalence {
        canonical: "politics",
        aliases: &[
            "politics",
            "government and politics",
            "govt and politics",
            "pol",
            "government",
            "international relations",
        ],
    },
    Equivalence {
        canonical: "public services",
        aliases: &["public services", "public service", "uniformed services", "emergency services"],
    },
    // Languages
    Equivalence {
        canonical: "french",
        aliases: &["french", "francais", "fr"],
    },
    Equivalence {
        canonical: "spanish",
        aliases: &["spanish", "español", "espanol", "sp"],
    },
    Equivalence {
        canonical: "german",
        aliases: &["german", "deutsch", "de"],
    },
    Equivalence {
        canonical: "arabic",
        aliases: &["arabic", "ar"],
    },
    Equivalence {
        canonical: "urdu",
        aliases: &["urdu"],
    },
    Equivalence {
        canonical: "chinese",
        aliases: &["chinese", "mandarin", "zh"],
    },
    Equivalence {
        canonical: "italian",
        aliases: &["italian", "it"],
    },
    Equivalence {
        canonical: "latin",
        aliases: &["latin"],
    },
    Equivalence {
        canonical: "greek",
        aliases: &["greek"],
    },
    Equivalence {
        canonical: "russian",
        aliases: &["russian", "ru"],
    },
    Equivalence {
        canonical: "japanese",
        aliases: &["japanese", "jp"],
    },
    Equivalence {
        canonical: "portuguese",
        aliases: &["portuguese", "pt"],
    },
    Equivalence {
        canonical: "hindi",
        aliases: &["hindi"],
    },
    Equivalence {
        canonical: "persian",
        aliases: &["persian"],
    },
    Equivalence {
        canonical: "bengali",
        aliases: &["bengali", "bangla"],
    },
    Equivalence {
        canonical: "turkish",
        aliases: &["turkish", "turkce", "turkiye"],
    },
    Equivalence {
        canonical: "punjabi",
        aliases: &["punjabi"],
    },
    Equivalence {
        canonical: "polish",
        aliases: &["polish", "polski"],
    },
    Equivalence {
        canonical: "welsh",
        aliases: &["welsh", "cymraeg"],
    },
    Equivalence {
        canonical: "gaelic",
        aliases: &["gaelic", "scottish gaelic", "irish gaelic"],
    },
    // Creative arts
    Equivalence {
        canonical: "art",
        aliases: &[
            "art",
            "arts",
            "fine art",
            "visual art",
            "graphics",
            "graphic design",
            "photography",
            "art & design",
            "sculpture",
        ],
    },
    Equivalence {
        canonical: "drama",
        aliases: &["drama", "theatre studies", "performing arts"],
    },
    Equivalence {
        canonical: "dance",
        aliases: &["dance", "dancing", "dance studies", "ballet", "contemporary dance"],
    },
    Equivalence {
        canonical: "music",
        aliases: &["music", "mus", "music technology", "music theory"],
    },
    Equivalence {
        canonical: "media studies",
        aliases: &[
            "media studies",
            "media",
            "media science",
            "film studies",
            "film",
            "media production",
        ],
    },
    Equivalence {
        canonical: "film studies",
        aliases: &["film studies", "film", "cinema studies", "filmmaking"],
    },
    Equivalence {
        canonical: "photography",
        aliases: &["photography", "photo studies"],
    },
    Equivalence {
        canonical: "graphics",
        aliases: &["graphics", "graphic design", "digital graphics", "graphic arts"],
    },
    // Design / tech
    Equivalence {
        canonical: "design and technology",
        aliases: &[
            "design and technology",
            "d&t",
            "dt",
            "design tech",
            "product design",
            "food tech",
            "textiles",
            "fashion",
            "resistant materials",
        ],
    },
    Equivalence {
        canonical: "engineering",
        aliases: &[
            "engineering",
            "engineer",
            "mechanical engineering",
            "electrical engineering",
            "civil engineering",
            "chemical engineering",
        ],
    },
    Equivalence {
        canonical: "automotive",
        aliases: &[
            "automotive",
            "automotive studies",
            "automobile",
            "motor vehicle",
            "car technology",
        ],
    },
    // Health & social care
    Equivalence {
        canonical: "pharmacy",
        aliases: &["pharmacy", "pharmacology"],
    },
    Equivalence {
        canonical: "health and social care",
        aliases: &[
            "health and social care",
            "health studies",
            "social care",
            "healthcare",
            "health sciences",
            "health science",
        ],
    },
    Equivalence {
        canonical: "public health",
        aliases: &["public health"],
    },
    Equivalence {
        canonical: "food science",
        aliases: &[
            "food science",
            "food technology",
            "nutrition",
            "nutrition science",
            "food studies",
        ],
    },
    Equivalence {
        canonical: "child development",
        aliases: &["child development", "childcare", "early childhood", "childhood studies"],
    },
    // Hospitality / tourism
    Equivalence {
        canonical: "hospitality",
        aliases: &[
            "hospitality",
            "hospitality studies",
            "hospitality management",
            "hotel management",
        ],
    },
    Equivalence {
        canonical: "travel and tourism",
        aliases: &[
            "travel and tourism",
            "tourism",
            "tourism studies",
            "travel",
            "tourism management",
        ],
    },
    // Aviation / transport / logistics
    Equivalence {
        canonical: "aviation",
        aliases: &[
            "aviation",
            "aviation studies",
            "airline operations",
            "pilot studies",
            "aeronautics",
            "flight operations",
        ],
    },
    Equivalence {
        canonical: "logistics",
        aliases: &[
            "logistics",
            "transport",
            "transport studies",
            "logistics management",
            "supply chain",
        ],
    },
    // Animal / agri / vet
    Equivalence {
        canonical: "animal management",
        aliases: &["animal management", "animal care", "animal studies", "animal science"],
    },
    Equivalence {
        canonical: "veterinary",
        aliases: &[
            "veterinary",
            "vet",
            "veterinary studies",
            "veterinary medicine",
            "veterinary science",
        ],
    },
    Equivalence {
        canonical: "agriculture",
        aliases: &["agriculture", "agricultural studies", "farming", "farm studies"],
    },
    Equivalence {
        canonical: "horticulture",
        aliases: &["horticulture", "gardening", "plant studies", "landscape studies"],
    },
    // Sport, fitness, pe
    Equivalence {
        canonical: "pe",
        aliases: &["pe", "physical education", "sports science"],
    },
    Equivalence {
        canonical: "sports science",
        aliases: &[
            "sports science",
            "sport science",
            "sports studies",
            "sport studies",
            "sports",
            "sport",
            "sports coaching",
            "fitness",
            "sports management",
        ],
    },
    // Beauty, hair, fashion
    Equivalence {
        canonical: "beauty therapy",
        aliases: &["beauty therapy", "beauty", "cosmetology", "beauty studies"],
    },
    Equivalence {
        canonical: "hairdressing",
        aliases: &["hairdressing", "hair styling", "hair studies"],
    },
];

/// Degree-level courses used for interest detection.
pub static COURSES: &[Equivalence] = &[
    // Medical & health sciences
    Equivalence {
        canonical: "medicine",
        aliases: &[
            "medicine",
            "med",
            "med school",
            "medical degree",
            "doctor",
            "mbbs",
            "md",
            "medical studies",
            "clinical medicine",
            "medicine programme",
            "medic",
        ],
    },
    Equivalence {
        canonical: "pharmacy",
        aliases: &[
            "pharmacy",
            "pharmacology",
            "pharma",
            "pharmaceutical sciences",
            "pharmaceutical studies",
            "pharmacy school",
            "pharmacist",
        ],
    },
    Equivalence {
        canonical: "dentistry",
        aliases: &[
            "dentistry",
            "dentist",
            "bds",
            "dental surgery",
            "dental studies",
            "dental school",
            "dental science",
            "dental degree",
            "dental",
        ],
    },
    Equivalence {
        canonical: "nursing",
        aliases: &[
            "nursing",
            "nurse",
            "bsc nursing",
            "nursing degree",
            "nursing science",
            "nursing studies",
            "registered nurse",
            "adult nursing",
            "paediatric nursing",
            "mental health nursing",
            "midwifery",
        ],
    },
    Equivalence {
        canonical: "physiotherapy",
        aliases: &[
            "physiotherapy",
            "physio",
            "physical therapy",
            "physiotherapy degree",
            "physiotherapist",
        ],
    },
    // Biological & physical sciences
    Equivalence {
        canonical: "biology",
        aliases: &[
            "biology",
            "bio",
            "biological sciences",
            "life sciences",
            "biomedical sciences",
            "molecular biology",
            "cell biology",
            "biological science degree",
            "marine biology",
            "ecology",
            "biotechnology",
            "plant biology",
            "zoology",
        ],
    },
    Equivalence {
        canonical: "biomedical engineering",
        aliases: &[
            "biomedical engineering",
            "biomedical eng",
            "biomed engineering",
            "bioengineering",
            "medical engineering",
        ],
    },
    Equivalence {
        canonical: "chemistry",
        aliases: &[
            "chemistry",
            "chem",
            "chemistry degree",
            "chemical sciences",
            "applied chemistry",
            "medicinal chemistry",
            "pharmaceutical chemistry",
            "chemistry studies",
        ],
    },
    Equivalence {
        canonical: "physics",
        aliases: &[
            "physics",
            "phys",
            "physics degree",
            "applied physics",
            "theoretical physics",
            "physics with astronomy",
            "astrophysics",
            "physics studies",
        ],
    },
    Equivalence {
        canonical: "environmental science",
        aliases: &[
            "environmental science",
            "enviro science",
            "environmental studies",
            "environmental management",
            "environmental policy",
            "environmental engineering",
            "sustainability",
            "conservation science",
            "ecology",
            "environmental science degree",
        ],
    },
    // Maths, computer science & engineering
    Equivalence {
        canonical: "mathematics",
        aliases: &[
            "mathematics",
            "maths",
            "math",
            "core maths",
            "pure maths",
            "applied maths",
            "decision maths",
            "stats",
            "statistics",
            "mechanics",
            "math degree",
            "mathematics degree",
            "core mathematics",
            "f.maths",
            "f.math",
        ],
    },
    Equivalence {
        canonical: "further mathematics",
        aliases: &[
            "further mathematics",
            "further maths",
            "further math",
            "f.maths",
            "f.math",
            "further-math",
            "fmaths",
            "fmath",
            "furthermaths",
            "furthermath",
            "f maths",
            "f math",
            "further mathematics degree",
        ],
    },
    Equivalence {
        canonical: "computer science",
        aliases: &[
            "computer science",
            "cs",
            "comp sci",
            "software engineering",
            "computing",
            "informatics",
            "information systems",
            "ict",
            "information tech",
            "data science",
            "artificial intelligence",
            "ai",
            "cybersecurity",
            "computer engineering",
            "digital technology",
            "machine learning",
            "comp science",
            "comp",
            "computers",
        ],
    },
    Equivalence {
        canonical: "engineering",
        aliases: &[
            "engineering",
            "eng",
            "engineering degree",
            "mechanical engineering",
            "electrical engineering",
            "civil engineering",
            "chemical engineering",
            "mechatronics",
            "aerospace engineering",
            "structural engineering",
            "electronic engineering",
            "software engineering",
            "engineering science",
        ],
    },
    // Architecture, construction & surveying
    Equivalence {
        canonical: "architecture",
        aliases: &[
            "architecture",
            "architect",
            "barch",
            "architectural studies",
            "architectural design",
            "architectural engineering",
            "architecture degree",
            "urban design",
            "landscape architecture",
            "architectural technology",
        ],
    },
    Equivalence {
        canonical: "architecture technology",
        aliases: &["architectural technology", "architecture technology", "building technology"],
    },
    Equivalence {
        canonical: "construction management",
        aliases: &[
            "construction",
            "construction management",
            "building studies",
            "construction engineering",
            "site management",
        ],
    },
    Equivalence {
        canonical: "quantity surveying",
        aliases: &["quantity surveying", "surveyor", "building surveying", "construction surveying"],
    },
    // Business, economics & management
    Equivalence {
        canonical: "business",
        aliases: &[
            "business",
            "business management",
            "bba",
            "business admin",
            "accounting",
            "accountancy",
            "business administration",
            "commerce",
            "business studies",
            "finance",
            "economics and finance",
            "mba",
            "management studies",
            "entrepreneurship",
            "marketing",
            "human resource management",
            "supply chain management",
        ],
    },
    Equivalence {
        canonical: "economics",
        aliases: &[
            "economics",
            "econ",
            "microeconomics",
            "macroeconomics",
            "economic studies",
            "economics degree",
            "finance and economics",
        ],
    },
    Equivalence {
        canonical: "hospitality",
        aliases: &[
            "hospitality",
            "international hospitality",
            "hospitality management",
            "hospitality and tourism",
            "hospitality with events",
            "events and hospitality",
            "culinary arts and hospitality",
            "hospitality business",
            "hospitality business management",
            "hospitality studies",
            "hospitality industry",
            "hospitality operations",
        ],
    },
    Equivalence {
        canonical: "events management",
        aliases: &[
            "events management",
            "event management",
            "events and hospitality",
            "events with hospitality",
            "event planning",
            "event studies",
        ],
    },
    Equivalence {
        canonical: "tourism",
        aliases: &[
            "tourism",
            "tourism management",
            "hospitality and tourism",
            "international tourism",
            "tourism studies",
        ],
    },
    Equivalence {
        canonical: "culinary arts",
        aliases: &[
            "culinary arts",
            "culinary management",
            "culinary studies",
            "culinary and hospitality",
        ],
    },
    Equivalence {
        canonical: "logistics and supply chain",
        aliases: &[
            "logistics",
            "logistics management",
            "supply chain",
            "supply chain management",
            "transport management",
        ],
    },
    Equivalence {
        canonical: "sports management",
        aliases: &["sports management", "sport management", "sports administration"],
    },
    // Social sciences & education
    Equivalence {
        canonical: "psychology",
        aliases: &[
            "psychology",
            "psych",
            "psyche",
            "clinical psychology",
            "forensic psychology",
            "applied psychology",
            "psychological sciences",
            "counselling psychology",
            "industrial psychology",
            "educational psychology",
            "psychology degree",
        ],
    },
    Equivalence {
        canonical: "sociology",
        aliases: &[
            "sociology",
            "socio",
            "social sciences",
            "social studies",
            "social research",
            "sociological studies",
            "sociology degree",
            "anthropology",
        ],
    },
    Equivalence {
        canonical: "criminology",
        aliases: &[
            "criminology",
            "crime science",
            "criminal justice",
            "criminal studies",
            "criminology degree",
        ],
    },
    Equivalence {
        canonical: "social work",
        aliases: &["social work", "social worker", "social care", "social policy"],
    },
    Equivalence {
        canonical: "public services",
        aliases: &["public services", "public administration", "emergency management"],
    },
    Equivalence {
        canonical: "education",
        aliases: &[
            "education",
            "teaching",
            "teacher training",
            "pgce",
            "b.ed",
            "educational studies",
            "education studies",
            "education degree",
            "school direct",
            "initial teacher training",
            "childhood studies",
            "educational psychology",
        ],
    },
    Equivalence {
        canonical: "special education",
        aliases: &["special education", "special needs education", "sen", "inclusion studies"],
    },
    Equivalence {
        canonical: "early childhood education",
        aliases: &[
            "early childhood education",
            "early years",
            "nursery studies",
            "childhood studies",
        ],
    },
    Equivalence {
        canonical: "youth work",
        aliases: &["youth work", "youth studies", "youth and community work"],
    },
    Equivalence {
        canonical: "community development",
        aliases: &["community development", "community studies", "community management"],
    },
    // Law, politics & international studies
    Equivalence {
        canonical: "law",
        aliases: &[
            "law",
            "llb",
            "legal studies",
            "criminal law",
            "public law",
            "constitutional law",
            "barrister",
            "solicitor",
            "law school",
            "jurisprudence",
            "law degree",
            "legal practice",
            "commercial law",
            "international law",
            "family law",
        ],
    },
    Equivalence {
        canonical: "politics",
        aliases: &[
            "politics",
            "political science",
            "government and politics",
            "government studies",
            "public policy",
            "politics degree",
            "international politics",
        ],
    },
    Equivalence {
        canonical: "international relations",
        aliases: &[
            "international relations",
            "global studies",
            "international studies",
            "international affairs",
            "diplomacy",
            "international politics",
            "international development",
        ],
    },
    Equivalence {
        canonical: "public relations",
        aliases: &[
            "public relations",
            "pr",
            "corporate communications",
            "strategic communications",
            "communications management",
            "public affairs",
        ],
    },
    // Humanities & languages
    Equivalence {
        canonical: "english",
        aliases: &[
            "english",
            "english studies",
            "english degree",
            "creative writing",
            "linguistics",
            "comparative literature",
        ],
    },
    Equivalence {
        canonical: "english literature",
        aliases: &[
            "english literature",
            "lit",
            "english lit",
            "literature",
            "literary studies",
            "eng lit",
        ],
    },
    Equivalence {
        canonical: "english language",
        aliases: &[
            "english language",
            "english lang",
            "eng lang",
            "lang",
            "language",
            "english studies",
        ],
    },
    Equivalence {
        canonical: "history",
        aliases: &[
            "history",
            "historian",
            "historical studies",
            "history degree",
            "ancient history",
            "modern history",
            "history and politics",
            "history and economics",
        ],
    },
    Equivalence {
        canonical: "philosophy",
        aliases: &[
            "philosophy",
            "philosophy and ethics",
            "philosophy degree",
            "philosophical studies",
            "ethics",
            "theology",
            "philosophy and religion",
            "metaphysics",
        ],
    },
    // Creative arts, design, performance
    Equivalence {
        canonical: "art",
        aliases: &[
            "art",
            "fine art",
            "visual art",
            "artist",
            "studio art",
            "art and design",
            "design",
            "applied arts",
            "sculpture",
            "painting",
            "graphic design",
            "illustration",
            "photography",
            "art history",
            "art degree",
        ],
    },
    Equivalence {
        canonical: "drama",
        aliases: &[
            "drama",
            "theatre",
            "theater",
            "theatre studies",
            "performing arts",
            "drama studies",
            "acting",
            "performance studies",
            "dramatic arts",
        ],
    },
    Equivalence {
        canonical: "music",
        aliases: &[
            "music",
            "music studies",
            "musician",
            "music performance",
            "music composition",
            "music production",
            "music technology",
            "conservatoire",
            "bmus",
            "musicology",
            "music degree",
        ],
    },
    Equivalence {
        canonical: "animation",
        aliases: &["animation", "animation studies", "animated arts"],
    },
    Equivalence {
        canonical: "game design",
        aliases: &["game design", "game development", "games design", "video game design"],
    },
    Equivalence {
        canonical: "film production",
        aliases: &["film production", "film making", "film studies", "cinema production"],
    },
    Equivalence {
        canonical: "photography",
        aliases: &["photography", "photo studies", "photographic arts"],
    },
    Equivalence {
        canonical: "graphic design",
        aliases: &["graphic design", "graphics", "digital graphics", "visual communication"],
    },
    Equivalence {
        canonical: "interior design",
        aliases: &["interior design", "interior architecture", "interior decoration"],
    },
    Equivalence {
        canonical: "costume design",
        aliases: &["costume design", "costume production", "theatre costume", "stage costume"],
    },
    Equivalence {
        canonical: "sound engineering",
        aliases: &["sound engineering", "audio engineering", "music technology"],
    },
    Equivalence {
        canonical: "fashion management",
        aliases: &["fashion management", "fashion business", "fashion buying", "fashion marketing"],
    },
    Equivalence {
        canonical: "cosmetology",
        aliases: &["cosmetology", "beauty therapy", "beauty studies"],
    },
    Equivalence {
        canonical: "hair and makeup",
        aliases: &["hair and makeup", "hairdressing", "hair styling", "makeup artistry", "make-up"],
    },
    // Sport, fitness & nutrition
    Equivalence {
        canonical: "sports science",
        aliases: &[
            "sports science",
            "sport science",
            "sports studies",
            "sport studies",
            "sport and exercise science",
            "kinesiology",
            "sports therapy",
            "sports management",
            "sports coaching",
        ],
    },
    Equivalence {
        canonical: "sports coaching",
        aliases: &["sports coaching", "sport coaching", "coaching science", "sports trainer"],
    },
    Equivalence {
        canonical: "physical education",
        aliases: &["physical education", "pe", "physical education studies", "sport education"],
    },
    Equivalence {
        canonical: "nutrition",
        aliases: &["nutrition", "nutrition science", "food science", "food technology", "dietetics"],
    },
    // Animal, agriculture & environment
    Equivalence {
        canonical: "animal science",
        aliases: &[
            "animal science",
            "animal studies",
            "zoology",
            "animal management",
            "animal care",
        ],
    },
    Equivalence {
        canonical: "veterinary",
        aliases: &[
            "veterinary",
            "veterinary medicine",
            "vet science",
            "vet",
            "vet school",
            "veterinary surgeon",
            "veterinary studies",
            "bvetmed",
            "vet degree",
        ],
    },
    Equivalence {
        canonical: "agriculture",
        aliases: &[
            "agriculture",
            "agricultural science",
            "agricultural studies",
            "farm management",
            "farming",
        ],
    },
    Equivalence {
        canonical: "horticulture",
        aliases: &["horticulture", "horticultural science", "gardening", "plant science"],
    },
    // Aviation, transport & maritime
    Equivalence {
        canonical: "aviation management",
        aliases: &[
            "aviation",
            "aviation management",
            "air transport management",
            "pilot studies",
            "aeronautical science",
            "aeronautics",
            "flight operations",
        ],
    },
    Equivalence {
        canonical: "maritime studies",
        aliases: &["maritime studies", "marine studies", "marine science", "shipping management"],
    },
    // Forensic science
    Equivalence {
        canonical: "forensic science",
        aliases: &["forensic science", "forensics", "forensic studies"],
    },
];
