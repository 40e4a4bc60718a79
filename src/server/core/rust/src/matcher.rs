/* src/server/core/rust/src/matcher.rs */

/// A locale segment found at the start of a pathname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMatch<'a> {
  pub locale: &'a str,
  /// Pathname with `/{locale}` removed; `/` when nothing is left.
  pub remainder: &'a str,
  /// Same as `remainder` but empty instead of `/` for a bare `/{locale}`.
  pub rest: &'a str,
}

/// Find the locale that prefixes `pathname`.
///
/// Matching is exact and case-sensitive, and the first locale in `locales`
/// order wins. Since a segment must end at `/` or end-of-path, `en` never
/// matches `/en-US/...`; ordering only matters for locales that are
/// themselves identical up to a `/`, which configuration should avoid.
pub fn match_path_locale<'a, S: AsRef<str>>(
  pathname: &'a str,
  locales: &'a [S],
) -> Option<PathMatch<'a>> {
  let after_slash = pathname.strip_prefix('/')?;
  locales.iter().map(AsRef::<str>::as_ref).find_map(|locale| {
    let rest = after_slash.strip_prefix(locale)?;
    if rest.is_empty() || rest.starts_with('/') {
      let remainder = if rest.is_empty() { "/" } else { rest };
      Some(PathMatch { locale, remainder, rest })
    } else {
      None
    }
  })
}

/// The part of `path` below `base_path`, or `None` when the path lies outside
/// the mount point. Every path is inside an empty base.
pub fn within_base_path<'a>(path: &'a str, base_path: &str) -> Option<&'a str> {
  let base = base_path.trim_end_matches('/');
  if base.is_empty() {
    return Some(path);
  }
  match path.strip_prefix(base)? {
    "" => Some("/"),
    rest if rest.starts_with('/') => Some(rest),
    _ => None,
  }
}

/// Strip a base path from a full request path, the way the hosting framework
/// does before the router sees it. Paths outside the base are returned as-is.
pub fn strip_base_path<'a>(path: &'a str, base_path: &str) -> &'a str {
  within_base_path(path, base_path).unwrap_or(path)
}
