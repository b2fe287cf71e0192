//! Friendly-URL rewrite rules.
//!
//! The registrar owns an explicit, ordered route table mapping URL path
//! patterns to internal query variables. It is built once at startup, held
//! in [`crate::state::AppState`], and consulted by the router's fallback
//! before any default handling: "top" priority, so the minisite rule is
//! evaluated ahead of everything that would otherwise claim the path.
//!
//! The one registered rule maps
//!
//! ```text
//! b/<business>/<location>[/]  →  minisite=1, minisite_biz, minisite_loc
//! ```
//!
//! Matching is anchored at the start of the path and never partial. Each
//! captured value must additionally satisfy the query-variable pattern
//! `[^&]+`, which keeps captured slugs from smuggling query-string
//! separators.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::route_key::MinisiteRouteKey;

/// Query-variable name carrying the feature-detection flag for minisites.
pub const MINISITE_FLAG: &str = "minisite";
/// Query-variable name for the captured business slug.
pub const MINISITE_BIZ: &str = "minisite_biz";
/// Query-variable name for the captured location slug.
pub const MINISITE_LOC: &str = "minisite_loc";

/// Anchored path pattern for the minisite rule; trailing slash optional,
/// empty segments do not match.
static MINISITE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^b/([^/]+)/([^/]+)/?$").unwrap());

/// Validation pattern applied to every captured query-variable value.
static QUERY_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^&]+$").unwrap());

/// One path-pattern-to-query-variable mapping.
pub struct RewriteRule {
    pattern: &'static Regex,
    /// Boolean feature-detection variable set to `"1"` on match.
    flag: &'static str,
    /// Names for the pattern's capture groups, in order.
    var_names: &'static [&'static str],
}

impl RewriteRule {
    /// The single minisite rule: `b/<business>/<location>[/]`.
    pub fn minisite() -> Self {
        Self {
            pattern: &MINISITE_PATH,
            flag: MINISITE_FLAG,
            var_names: &[MINISITE_BIZ, MINISITE_LOC],
        }
    }

    /// Applies the rule to a path (no leading slash).
    ///
    /// Returns the query variables on a match, starting with the boolean
    /// flag, or `None` when the pattern does not match or a capture fails
    /// the query-variable rule.
    pub fn apply(&self, path: &str) -> Option<Vec<(&'static str, String)>> {
        let caps = self.pattern.captures(path)?;

        let mut vars = Vec::with_capacity(self.var_names.len() + 1);
        vars.push((self.flag, "1".to_string()));

        for (i, name) in self.var_names.iter().enumerate() {
            let value = caps.get(i + 1)?.as_str();
            if !QUERY_VAR.is_match(value) {
                return None;
            }
            vars.push((name, value.to_string()));
        }

        Some(vars)
    }
}

/// Ordered rewrite-rule table. First matching rule wins.
pub struct RouteRegistrar {
    rules: Vec<RewriteRule>,
}

impl RouteRegistrar {
    /// Builds the registrar with the minisite rule registered at the top.
    pub fn new() -> Self {
        let mut registrar = Self { rules: Vec::new() };
        registrar.register_top(RewriteRule::minisite());
        registrar
    }

    /// Inserts a rule ahead of all existing rules, so it is evaluated first.
    pub fn register_top(&mut self, rule: RewriteRule) {
        self.rules.insert(0, rule);
    }

    /// Resolves a request path to query variables via the first matching
    /// rule. Non-matching paths fall through to the host router's default
    /// handling; that is not an error.
    pub fn resolve(&self, path: &str) -> Option<Vec<(&'static str, String)>> {
        let path = path.trim_start_matches('/');
        self.rules.iter().find_map(|rule| rule.apply(path))
    }

    /// Resolves a request path to a minisite route key, when the matched
    /// rule carries the `minisite=1` flag.
    pub fn resolve_minisite(&self, path: &str) -> Option<MinisiteRouteKey> {
        let vars = self.resolve(path)?;

        if !vars.iter().any(|(n, v)| *n == MINISITE_FLAG && v == "1") {
            return None;
        }

        let business = vars.iter().find(|(n, _)| *n == MINISITE_BIZ)?.1.clone();
        let location = vars.iter().find(|(n, _)| *n == MINISITE_LOC)?.1.clone();

        MinisiteRouteKey::new(business, location).ok()
    }
}

impl Default for RouteRegistrar {
    fn default() -> Self {
        Self::new()
    }
}
