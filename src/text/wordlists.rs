//! Built-in exclusion lists
//!
//! Both lists are lowercase. Entries of two letters or fewer are kept even
//! though the length filter already drops them, so the lists stay usable
//! with a lower minimum length.

/// High-frequency, low-information English words
pub const STOP_WORDS: &[&str] = &[
    // Articles
    "a", "an", "the",
    // Pronouns
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those",
    // Prepositions
    "in", "on", "at", "by", "for", "with", "about", "against", "between",
    "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "up", "down", "out", "off", "over", "under", "upon",
    "until", "till", "along",
    // Conjunctions
    "and", "but", "or", "nor", "so", "yet", "both", "either", "neither", "though",
    // Auxiliary and modal verbs
    "is", "am", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing",
    "will", "would", "shall", "should", "may", "might", "must", "can", "could",
    "cannot",
    // Other common words
    "of", "as", "if", "then", "than", "because", "while", "although",
    "where", "when", "how", "all", "each", "every", "any", "some",
    "no", "not", "only", "own", "same", "just", "now", "here", "there",
    "very", "too", "also", "well", "back", "even", "still", "way", "yes",
    "day", "one", "two", "three", "other", "like", "much", "most", "many",
    "more", "less", "man", "men", "great", "such", "little", "why", "per",
    // Contraction fragments
    "s", "t", "d", "ll", "ve", "re", "m",
];

/// Common English first names, surnames and titles
pub const COMMON_NAMES: &[&str] = &[
    // Male names
    "john", "james", "william", "henry", "george", "charles", "thomas",
    "edward", "robert", "richard", "joseph", "david", "michael", "peter",
    "paul", "mark", "steven", "andrew", "daniel", "matthew", "christopher",
    "frank", "harry", "jack", "tom", "bill", "bob", "jim", "joe", "sam",
    "ben", "fred", "walter", "arthur", "albert", "alfred", "ernest", "darcy",
    // Female names
    "mary", "elizabeth", "margaret", "anne", "jane", "sarah", "alice",
    "emma", "catherine", "charlotte", "emily", "helen", "lucy", "susan",
    "nancy", "betty", "dorothy", "ruth", "rose", "grace", "clara", "ellen",
    // Surnames
    "smith", "jones", "brown", "wilson", "taylor", "johnson", "white",
    "martin", "anderson", "thompson", "garcia", "martinez", "robinson",
    "clark", "lewis", "lee", "walker", "hall", "allen", "young", "king",
    // Titles
    "mr", "mrs", "miss", "ms", "sir", "lord", "lady", "dr", "professor",
];
