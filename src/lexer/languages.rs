use lazy_static::lazy_static;
use std::collections::HashSet;

use tracing::debug;

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "for", "while", "do", "break",
    "continue", "switch", "case", "default", "try", "catch", "finally", "throw", "new", "this",
    "super", "class", "extends", "import", "export", "from", "as", "async", "await", "true",
    "false", "null", "undefined", "typeof", "instanceof", "in", "of",
];

const TYPESCRIPT_KEYWORDS: &[&str] = &[
    "interface", "type", "enum", "public", "private", "protected", "readonly", "static",
    "abstract", "implements", "namespace", "declare",
];

const REACT_KEYWORDS: &[&str] = &["React"];

lazy_static! {
    static ref JAVASCRIPT: HashSet<&'static str> = keyword_set(&[JAVASCRIPT_KEYWORDS]);
    static ref TYPESCRIPT: HashSet<&'static str> =
        keyword_set(&[JAVASCRIPT_KEYWORDS, TYPESCRIPT_KEYWORDS]);
    static ref JSX: HashSet<&'static str> = keyword_set(&[JAVASCRIPT_KEYWORDS, REACT_KEYWORDS]);
    static ref TSX: HashSet<&'static str> =
        keyword_set(&[JAVASCRIPT_KEYWORDS, TYPESCRIPT_KEYWORDS, REACT_KEYWORDS]);
}

fn keyword_set(groups: &[&[&'static str]]) -> HashSet<&'static str> {
    groups.iter().flat_map(|group| group.iter().copied()).collect()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Jsx,
    Tsx,
}

impl Language {
    /// Resolves a language identifier, falling back to JavaScript for
    /// anything unrecognised.
    pub fn from_name(name: &str) -> Language {
        match Language::lookup(name) {
            Some(language) => language,
            None => {
                debug!(language = name, "unknown language, using javascript keywords");
                Language::JavaScript
            }
        }
    }

    /// Exact, case-sensitive match on the profile name.
    pub fn lookup(name: &str) -> Option<Language> {
        match name {
            "javascript" => Some(Language::JavaScript),
            "typescript" => Some(Language::TypeScript),
            "jsx" => Some(Language::Jsx),
            "tsx" => Some(Language::Tsx),
            _ => None,
        }
    }

    /// Maps a file extension onto a language identifier.
    pub fn from_extension(extension: &str) -> Option<Language> {
        match extension {
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "jsx" => Some(Language::Jsx),
            "tsx" => Some(Language::Tsx),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Jsx => "jsx",
            Language::Tsx => "tsx",
        }
    }

    pub fn keywords(&self) -> &'static HashSet<&'static str> {
        match self {
            Language::JavaScript => &*JAVASCRIPT,
            Language::TypeScript => &*TYPESCRIPT,
            Language::Jsx => &*JSX,
            Language::Tsx => &*TSX,
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords().contains(word)
    }

    /// Tag and attribute patterns only apply to markup-flavored languages.
    pub fn is_markup(&self) -> bool {
        matches!(self, Language::Jsx | Language::Tsx)
    }
}
