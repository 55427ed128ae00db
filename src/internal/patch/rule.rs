//! Rewrite rules: a named regex pattern paired with a replacement template.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{PatchError, PatchResult};

/// Path patched when no target is given, relative to the working directory.
pub const DEFAULT_TARGET: &str =
    "backend/src/test/java/com/docassistant/document/service/DocumentServicePropertyTest.java";

const SYSTEM_LOG_MOCK_PATTERN: &str =
    r"(DocumentPreviewService documentPreviewService = mock\(DocumentPreviewService\.class\);)";
const SYSTEM_LOG_MOCK_REPLACEMENT: &str = "${1}\n        com.docassistant.auth.service.SystemLogService systemLogService = mock(com.docassistant.auth.service.SystemLogService.class);";

const DOCUMENT_SERVICE_CTOR_PATTERN: &str = r"new DocumentServiceImpl\(\s*documentRepository,\s*fileStorageService,\s*storageQuotaService,\s*documentPreviewService\)";
const DOCUMENT_SERVICE_CTOR_REPLACEMENT: &str = "new DocumentServiceImpl(\n            documentRepository, fileStorageService, storageQuotaService, documentPreviewService, systemLogService)";

lazy_static! {
    static ref SYSTEM_LOG_MOCK_RE: Regex =
        Regex::new(SYSTEM_LOG_MOCK_PATTERN).expect("Invalid Regex");
    static ref DOCUMENT_SERVICE_CTOR_RE: Regex =
        Regex::new(DOCUMENT_SERVICE_CTOR_PATTERN).expect("Invalid Regex");
}

/// One find/replace step.
///
/// The replacement is a `regex` template: `$1`, `${1}` and `$name` expand to
/// capture groups, `$$` is a literal dollar sign.
#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub pattern: Regex,
    pub replacement: String,
}

impl Rule {
    /// Compile `pattern` into a rule.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> PatchResult<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|source| PatchError::InvalidRule {
            name: name.clone(),
            source,
        })?;
        Ok(Rule {
            name,
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Number of non-overlapping matches in `text`.
    pub fn count_matches(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: /{}/", self.name, self.pattern.as_str())
    }
}

/// Ordered list of rules applied one after another.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleSet { rules }
    }

    /// The two rules that wire `SystemLogService` into `DocumentServicePropertyTest`:
    /// declare the mock right after the preview-service mock, then pass it as the
    /// trailing constructor argument.
    pub fn builtin() -> Self {
        RuleSet::new(vec![
            Rule {
                name: "inject-system-log-mock".to_string(),
                pattern: SYSTEM_LOG_MOCK_RE.clone(),
                replacement: SYSTEM_LOG_MOCK_REPLACEMENT.to_string(),
            },
            Rule {
                name: "extend-document-service-ctor".to_string(),
                pattern: DOCUMENT_SERVICE_CTOR_RE.clone(),
                replacement: DOCUMENT_SERVICE_CTOR_REPLACEMENT.to_string(),
            },
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
