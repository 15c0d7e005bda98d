//! Word lists backing the fake-data calls on `SeededGenerator`.
//!
//! Order matters: generators index into these slices, so reordering or
//! inserting entries changes every fixture built from them.

pub const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alan", "Albert", "Alexander", "Alexis", "Alice", "Amanda", "Amber",
    "Amy", "Andrea", "Andrew", "Angela", "Ann", "Anna", "Anthony", "Ashley", "Barbara", "Benjamin",
    "Betty", "Beverly", "Billy", "Bobby", "Brandon", "Brenda", "Brian", "Brittany", "Bruce",
    "Bryan", "Carl", "Carol", "Carolyn", "Catherine", "Charles", "Cheryl", "Christian",
    "Christina", "Christine", "Christopher", "Cynthia", "Daniel", "Danielle", "David", "Deborah",
    "Debra", "Denise", "Dennis", "Diana", "Diane", "Donald", "Donna", "Doris", "Dorothy",
    "Douglas", "Dylan", "Edward", "Elizabeth", "Emily", "Emma", "Eric", "Ethan", "Eugene",
    "Evelyn", "Frances", "Frank", "Gabriel", "Gary", "George", "Gerald", "Gloria", "Grace",
    "Gregory", "Hannah", "Harold", "Heather", "Helen", "Henry", "Isabella", "Jack", "Jacob",
    "Jacqueline", "James", "Janet", "Janice", "Jason", "Jean", "Jeffrey", "Jennifer", "Jeremy",
    "Jerry", "Jesse", "Jessica", "Joan", "Joe", "John", "Jonathan", "Jordan", "Jose", "Joseph",
    "Joshua", "Joyce", "Juan", "Judith", "Judy", "Julia", "Julie", "Justin", "Karen",
    "Katherine", "Kathleen", "Kathryn", "Kayla", "Keith", "Kelly", "Kenneth", "Kevin",
    "Kimberly", "Kyle", "Larry", "Laura", "Lauren", "Lawrence", "Linda", "Lisa", "Logan",
    "Lori", "Louis", "Madison", "Margaret", "Maria", "Marie", "Marilyn", "Mark", "Martha",
    "Mary", "Matthew", "Megan", "Melissa", "Michael", "Michelle", "Nancy", "Natalie", "Nathan",
    "Nicholas", "Nicole", "Noah", "Olivia", "Pamela", "Patricia", "Patrick", "Paul", "Peter",
    "Philip", "Rachel", "Ralph", "Randy", "Raymond", "Rebecca", "Richard", "Robert", "Roger",
    "Ronald", "Rose", "Roy", "Russell", "Ruth", "Ryan", "Samantha", "Samuel", "Sandra", "Sara",
    "Sarah", "Scott", "Sean", "Sharon", "Shirley", "Sophia", "Stephanie", "Stephen", "Steven",
    "Susan", "Teresa", "Terry", "Theresa", "Thomas", "Timothy", "Tyler", "Victoria", "Vincent",
    "Virginia", "Walter", "Wayne", "William", "Willie", "Zachary",
];

pub const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Alvarez", "Anderson", "Bailey", "Baker", "Barnes", "Bell", "Bennett",
    "Brooks", "Brown", "Butler", "Campbell", "Carter", "Castillo", "Chavez", "Clark", "Collins",
    "Cook", "Cooper", "Cox", "Cruz", "Davis", "Diaz", "Edwards", "Evans", "Fisher", "Flores",
    "Foster", "Garcia", "Gomez", "Gonzalez", "Gray", "Green", "Gutierrez", "Hall", "Harris",
    "Hernandez", "Hill", "Howard", "Hughes", "Jackson", "James", "Jenkins", "Johnson", "Jones",
    "Kelly", "Kim", "King", "Lee", "Lewis", "Long", "Lopez", "Martin", "Martinez", "Miller",
    "Mitchell", "Moore", "Morales", "Morgan", "Morris", "Murphy", "Myers", "Nelson", "Nguyen",
    "Ortiz", "Parker", "Patel", "Perez", "Peterson", "Phillips", "Powell", "Price", "Ramirez",
    "Ramos", "Reed", "Reyes", "Richardson", "Rivera", "Roberts", "Robinson", "Rodriguez",
    "Rogers", "Ross", "Ruiz", "Sanchez", "Sanders", "Scott", "Smith", "Stewart", "Sullivan",
    "Taylor", "Thomas", "Thompson", "Torres", "Turner", "Walker", "Ward", "Watson", "White",
    "Williams", "Wilson", "Wood", "Wright", "Young",
];

pub const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

pub const STREET_NAMES: &[&str] = &[
    "Adams", "Ash", "Birch", "Cedar", "Cherry", "Chestnut", "Church", "Dogwood", "Elm",
    "Forest", "Franklin", "Highland", "Hill", "Hickory", "Jackson", "Jefferson", "Lake",
    "Laurel", "Lincoln", "Madison", "Main", "Maple", "Meadow", "Mill", "Oak", "Park", "Pine",
    "Poplar", "Ridge", "River", "Spring", "Spruce", "Sunset", "Valley", "Walnut", "Washington",
    "Willow", "Wilson",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Boulevard", "Circle", "Court", "Drive", "Lane", "Parkway", "Place", "Road",
    "Street", "Terrace", "Trail", "Way",
];

pub const CITY_PREFIXES: &[&str] = &[
    "North", "South", "East", "West", "New", "Lake", "Port", "Fort", "Mount", "Saint",
];

pub const CITY_STEMS: &[&str] = &[
    "Ashford", "Bayview", "Brookfield", "Carlton", "Clearwater", "Denton", "Fairview",
    "Glenwood", "Greenville", "Hampton", "Harbor", "Kingston", "Lakeside", "Maplewood",
    "Marion", "Milford", "Newport", "Oakdale", "Riverside", "Salem", "Springfield", "Stanton",
    "Westfield", "Windsor",
];

pub const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY",
];

pub const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###)###-####",
    "###.###.####",
    "+1-###-###-####",
    "###-###-####x###",
];

pub const LOREM_WORDS: &[&str] = &[
    "ability", "able", "about", "above", "accept", "across", "act", "action", "add", "admit",
    "after", "again", "against", "agree", "air", "all", "almost", "along", "already", "also",
    "always", "among", "amount", "and", "animal", "another", "answer", "any", "anyone", "appear",
    "area", "argue", "arm", "around", "art", "article", "ask", "author", "away", "back", "bad",
    "bag", "bank", "bar", "base", "be", "beat", "because", "become", "bed", "before", "begin",
    "behind", "believe", "best", "better", "between", "beyond", "big", "bill", "black", "blood",
    "blue", "board", "body", "book", "born", "both", "box", "break", "bring", "brother",
    "budget", "build", "building", "business", "buy", "call", "camera", "campaign", "can",
    "cancer", "car", "card", "care", "career", "carry", "case", "catch", "cause", "cell",
    "center", "central", "century", "chair", "chance", "change", "charge", "check", "child",
    "choice", "choose", "church", "citizen", "city", "civil", "claim", "class", "clear", "close",
    "coach", "cold", "college", "color", "come", "common", "community", "company", "concern",
    "condition", "consider", "contain", "control", "cost", "could", "country", "course", "court",
    "cover", "create", "crime", "cultural", "culture", "cup", "current", "customer", "cut",
    "dark", "data", "daughter", "day", "dead", "deal", "decade", "decide", "deep", "degree",
    "describe", "design", "detail", "develop", "die", "different", "difficult", "dinner",
    "direction", "discover", "discuss", "disease", "do", "doctor", "dog", "door", "down", "draw",
    "dream", "drive", "drop", "during", "each", "early", "east", "easy", "eat", "economic",
    "edge", "effect", "effort", "eight", "either", "election", "else", "employee", "end",
    "energy", "enjoy", "enough", "enter", "entire", "environment", "especially", "even",
    "evening", "event", "ever", "every", "evidence", "exactly", "example", "expect", "expert",
    "explain", "eye", "face", "fact", "factor", "fall", "family", "far", "fast", "father", "fear",
    "feel", "few", "field", "fight", "figure", "fill", "film", "final", "find", "fine", "finish",
    "fire", "firm", "first", "fish", "five", "floor", "fly", "focus", "follow", "food", "foot",
    "force", "foreign", "forget", "form", "forward", "four", "free", "friend", "from", "front",
    "full", "fund", "future", "game", "garden", "gas", "general", "get", "girl", "give", "glass",
    "goal", "good", "government", "great", "green", "ground", "group", "grow", "growth", "guess",
    "gun", "guy", "hair", "half", "hand", "hang", "happen", "happy", "hard", "have", "head",
    "health", "hear", "heart", "heavy", "help", "her", "here", "herself", "high", "him",
    "himself", "his", "history", "hit", "hold", "home", "hope", "hospital", "hot", "hotel",
    "hour", "house", "how", "however", "huge", "human", "hundred", "husband", "idea", "identify",
    "image", "imagine", "impact", "important", "improve", "include", "increase", "indeed",
    "indicate", "industry", "information", "inside", "instead", "interest", "interview",
    "investment", "issue", "item", "itself", "job", "join", "just", "keep", "key", "kid", "kind",
    "kitchen", "know", "knowledge", "land", "language", "large", "last", "late", "later", "laugh",
    "law", "lawyer", "lay", "lead", "leader", "learn", "least", "leave", "left", "leg", "legal",
    "less", "let", "letter", "level", "lie", "life", "light", "like", "likely", "line", "list",
    "listen", "little", "live", "local", "long", "look", "lose", "loss", "lot", "low", "machine",
    "magazine", "main", "maintain", "major", "majority", "make", "man", "manage", "management",
    "manager", "many", "market", "marriage", "material", "matter", "may", "maybe", "mean",
    "measure", "media", "medical", "meet", "meeting", "member", "memory", "mention", "message",
    "method", "middle", "might", "military", "million", "mind", "minute", "miss", "mission",
    "model", "modern", "moment", "money", "month", "more", "morning", "most", "mother", "mouth",
    "move", "movement", "movie", "much", "music", "must", "myself", "name", "nation", "national",
    "natural", "nature", "near", "nearly", "necessary", "need", "network", "never", "new", "news",
    "newspaper", "next", "nice", "night", "none", "nor", "north", "not", "note", "nothing",
    "notice", "now", "number", "occur", "off", "offer", "office", "officer", "official", "often",
    "oil", "old", "once", "one", "only", "onto", "open", "operation", "opportunity", "option",
    "order", "organization", "other", "others", "our", "out", "outside", "over", "own", "owner",
    "page", "pain", "painting", "paper", "parent", "part", "participant", "particular",
    "partner", "party", "pass", "past", "patient", "pattern", "pay", "peace", "people", "per",
    "perform", "perhaps", "period", "person", "personal", "phone", "physical", "pick", "picture",
    "piece", "place", "plan", "plant", "play", "player", "point", "police", "policy", "political",
    "poor", "popular", "population", "position", "positive", "possible", "power", "practice",
    "prepare", "present", "president", "pressure", "pretty", "prevent", "price", "private",
    "probably", "problem", "process", "produce", "product", "production", "professional",
    "professor", "program", "project", "property", "protect", "prove", "provide", "public",
    "pull", "purpose", "push", "put", "quality", "question", "quickly", "quite", "race", "radio",
    "raise", "range", "rate", "rather", "reach", "read", "ready", "real", "reality", "realize",
    "really", "reason", "receive", "recent", "recently", "recognize", "record", "red", "reduce",
    "reflect", "region", "relate", "remain", "remember", "remove", "report", "represent",
    "require", "research", "resource", "respond", "response", "rest", "result", "return",
    "reveal", "rich", "right", "rise", "risk", "road", "rock", "role", "room", "rule", "run",
    "safe", "same", "save", "say", "scene", "school", "science", "score", "sea", "season", "seat",
    "second", "section", "security", "see", "seek", "seem", "sell", "send", "senior", "sense",
    "series", "serious", "serve", "service", "set", "seven", "several", "shake", "share", "she",
    "short", "should", "shoulder", "show", "side", "sign", "significant", "similar", "simple",
    "simply", "since", "sing", "single", "sister", "sit", "site", "situation", "six", "size",
    "skill", "skin", "small", "smile", "social", "society", "soldier", "some", "somebody",
    "someone", "something", "sometimes", "son", "song", "soon", "sort", "sound", "source",
    "south", "southern", "space", "speak", "special", "specific", "speech", "spend", "sport",
    "spring", "staff", "stage", "stand", "standard", "star", "start", "state", "statement",
    "station", "stay", "step", "still", "stock", "stop", "store", "story", "strategy", "street",
    "strong", "structure", "student", "study", "stuff", "style", "subject", "success",
    "successful", "such", "suddenly", "suffer", "suggest", "summer", "support", "sure",
    "surface", "system", "table", "take", "talk", "task", "tax", "teach", "tenant", "team",
    "technology", "television", "tell", "ten", "tend", "term", "test", "than", "thank", "that",
    "their", "them", "themselves", "then", "theory", "there", "these", "they", "thing", "think",
    "third", "this", "those", "though", "thought", "thousand", "threat", "three", "through",
    "throughout", "throw", "thus", "time", "today", "together", "tonight", "too", "top", "total",
    "tough", "toward", "town", "trade", "traditional", "training", "travel", "treat",
    "treatment", "tree", "trial", "trip", "trouble", "true", "truth", "try", "turn", "two",
    "type", "under", "understand", "unit", "until", "upon", "use", "usually", "value", "various",
    "very", "victim", "view", "violence", "visit", "voice", "vote", "wait", "walk", "wall",
    "want", "war", "watch", "water", "way", "weapon", "wear", "week", "weight", "well", "west",
    "western", "what", "whatever", "when", "where", "whether", "which", "while", "white", "who",
    "whole", "whom", "whose", "why", "wide", "wife", "will", "win", "wind", "window", "wish",
    "with", "within", "without", "woman", "wonder", "word", "work", "worker", "world", "worry",
    "would", "write", "writer", "wrong", "yard", "yeah", "year", "yes", "yet", "you", "young",
    "your", "yourself",
];
