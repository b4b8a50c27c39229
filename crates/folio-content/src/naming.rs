//! Title and slug derivation from on-disk names.
//!
//! On-disk names carry ordering prefixes (`01_intro.md`, `02_docker/`) so
//! authors can reorder content by renaming. Public slugs and display titles
//! strip those prefixes, so reordering never changes a URL.

/// Markdown file extension, matched case-insensitively.
const MD_EXT: &str = ".md";

/// Strip a leading ordering prefix: a run of ASCII digits plus one optional
/// `_` or `-` separator.
///
/// Stacked prefixes (`01_02_intro`) are stripped repeatedly. A prefix is
/// never stripped when nothing would be left, so `2024` stays `2024`.
///
/// # Examples
///
/// ```
/// use folio_content::naming::strip_order_prefix;
///
/// assert_eq!(strip_order_prefix("01_intro"), "intro");
/// assert_eq!(strip_order_prefix("10docker"), "docker");
/// assert_eq!(strip_order_prefix("intro"), "intro");
/// ```
#[must_use]
pub fn strip_order_prefix(name: &str) -> &str {
    let mut rest = name;
    loop {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return rest;
        }
        let after = &rest[digits..];
        let after = after.strip_prefix(['_', '-']).unwrap_or(after);
        if after.is_empty() {
            return rest;
        }
        rest = after;
    }
}

/// Strip a trailing `.md` extension, ignoring case.
#[must_use]
pub fn strip_md_extension(filename: &str) -> &str {
    let split = filename.len().saturating_sub(MD_EXT.len());
    match filename.get(split..) {
        Some(ext) if ext.eq_ignore_ascii_case(MD_EXT) => &filename[..split],
        _ => filename,
    }
}

/// True for names ending in `.md`.
#[must_use]
pub fn is_markdown(filename: &str) -> bool {
    strip_md_extension(filename).len() != filename.len()
}

/// Display title for a markdown filename.
///
/// # Examples
///
/// ```
/// use folio_content::naming::filename_to_title;
///
/// assert_eq!(filename_to_title("01_introduction_to_docker.md"), "Introduction to docker");
/// ```
#[must_use]
pub fn filename_to_title(filename: &str) -> String {
    let stem = strip_order_prefix(strip_md_extension(filename));
    capitalize_first(&stem.replace(['_', '-'], " "))
}

/// Display title for a folder name (`01_docker` becomes `Docker`).
#[must_use]
pub fn folder_to_title(name: &str) -> String {
    capitalize_first(strip_order_prefix(name))
}

/// Public URL segment for an on-disk folder or file identifier.
///
/// Idempotent: applying it to its own output changes nothing.
///
/// # Examples
///
/// ```
/// use folio_content::naming::to_pretty_slug;
///
/// assert_eq!(to_pretty_slug("01_Introduction_To_Docker"), "introduction-to-docker");
/// assert_eq!(to_pretty_slug("box-model"), "box-model");
/// ```
#[must_use]
pub fn to_pretty_slug(raw: &str) -> String {
    let normalized = raw.replace('_', "-").to_lowercase();
    strip_order_prefix(&normalized).to_owned()
}

/// Slug derived from heading text.
///
/// Lowercases, collapses every run of characters outside `[a-z0-9]` into a
/// single `-` and trims leading and trailing `-`. Returns `None` when
/// nothing is left.
#[must_use]
pub fn slugify_heading(heading: &str) -> Option<String> {
    let mut slug = String::with_capacity(heading.len());
    let mut pending_dash = false;

    for c in heading.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    (!slug.is_empty()).then_some(slug)
}

/// Uppercase the first character and lowercase the rest.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strip_order_prefix() {
        assert_eq!(strip_order_prefix("01_intro"), "intro");
        assert_eq!(strip_order_prefix("01-intro"), "intro");
        assert_eq!(strip_order_prefix("01intro"), "intro");
        assert_eq!(strip_order_prefix("01_02_intro"), "intro");
        assert_eq!(strip_order_prefix("intro_01"), "intro_01");
        assert_eq!(strip_order_prefix(""), "");
    }

    #[test]
    fn test_strip_order_prefix_keeps_numeric_name() {
        assert_eq!(strip_order_prefix("2024"), "2024");
        assert_eq!(strip_order_prefix("01_2024"), "2024");
        assert_eq!(strip_order_prefix("01_"), "01_");
    }

    #[test]
    fn test_strip_md_extension() {
        assert_eq!(strip_md_extension("01_intro.md"), "01_intro");
        assert_eq!(strip_md_extension("NOTES.MD"), "NOTES");
        assert_eq!(strip_md_extension("config.yaml"), "config.yaml");
        assert_eq!(strip_md_extension("md"), "md");
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown("intro.md"));
        assert!(is_markdown("README.MD"));
        assert!(!is_markdown("config.yaml"));
        assert!(!is_markdown("intro.mdx"));
    }

    #[test]
    fn test_filename_to_title() {
        assert_eq!(
            filename_to_title("01_introduction_to_docker.md"),
            "Introduction to docker"
        );
        assert_eq!(filename_to_title("01_intro.md"), "Intro");
        assert_eq!(filename_to_title("my-first-post.md"), "My first post");
        assert_eq!(filename_to_title("02_CSS_Grid.md"), "Css grid");
        assert_eq!(filename_to_title(".md"), "");
    }

    #[test]
    fn test_folder_to_title() {
        assert_eq!(folder_to_title("01_docker"), "Docker");
        assert_eq!(folder_to_title("02_HTML"), "Html");
        assert_eq!(folder_to_title("kubernetes"), "Kubernetes");
    }

    #[test]
    fn test_to_pretty_slug() {
        assert_eq!(to_pretty_slug("01_docker"), "docker");
        assert_eq!(to_pretty_slug("01_intro"), "intro");
        assert_eq!(
            to_pretty_slug("01_introduction_to_docker"),
            "introduction-to-docker"
        );
        assert_eq!(to_pretty_slug("Box-Model"), "box-model");
    }

    #[test]
    fn test_slugify_heading() {
        assert_eq!(
            slugify_heading("The Box Model").as_deref(),
            Some("the-box-model")
        );
        assert_eq!(
            slugify_heading("  C++ & Rust!  ").as_deref(),
            Some("c-rust")
        );
        assert_eq!(slugify_heading("--Flex--box--").as_deref(), Some("flex-box"));
        assert_eq!(slugify_heading("!!!"), None);
        assert_eq!(slugify_heading(""), None);
    }

    proptest! {
        #[test]
        fn prop_pretty_slug_idempotent(s in "[0-9]{0,4}[_-]?[A-Za-z0-9_ -]{0,24}") {
            let once = to_pretty_slug(&s);
            prop_assert_eq!(to_pretty_slug(&once), once);
        }

        #[test]
        fn prop_title_strips_prefix_and_has_one_capital(
            prefix in "[0-9]{1,3}_?",
            stem in "[a-zA-Z][a-zA-Z_-]{0,20}",
        ) {
            let filename = format!("{prefix}{stem}.md");
            let title = filename_to_title(&filename);

            prop_assert!(!title.starts_with(|c: char| c.is_ascii_digit()));
            prop_assert!(title.chars().skip(1).all(|c| !c.is_uppercase()));
            prop_assert!(title.starts_with(|c: char| c.is_uppercase()));
        }

        #[test]
        fn prop_slugify_heading_shape(heading in ".{0,40}") {
            if let Some(slug) = slugify_heading(&heading) {
                prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
                prop_assert!(!slug.contains("--"));
                prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            }
        }
    }
}
