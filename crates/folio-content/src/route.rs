//! Public URL parsing.

use std::fmt;

/// A public URL the site can serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/docs`
    DocsIndex,
    /// `/courses`
    CoursesIndex,
    /// `/blogs`
    BlogsIndex,
    /// `/<folder>/<file>`
    Doc { folder: String, file: String },
    /// `/courses/<course>/<file>`
    Course { course: String, file: String },
    /// `/blogs/<slug>`
    Blog { slug: String },
}

impl Route {
    /// Parse a URL path. Query strings, fragments and repeated or trailing
    /// slashes are ignored. Unknown shapes give `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_content::Route;
    ///
    /// assert_eq!(
    ///     Route::parse("/courses/css/box-model"),
    ///     Some(Route::Course { course: "css".into(), file: "box-model".into() })
    /// );
    /// assert_eq!(Route::parse("/blogs/"), Some(Route::BlogsIndex));
    /// assert_eq!(Route::parse("/a/b/c"), None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let route = match segments.as_slice() {
            ["docs"] => Self::DocsIndex,
            ["courses"] => Self::CoursesIndex,
            ["blogs"] => Self::BlogsIndex,
            ["courses", course, file] => Self::Course {
                course: (*course).to_owned(),
                file: (*file).to_owned(),
            },
            ["blogs", slug] => Self::Blog {
                slug: (*slug).to_owned(),
            },
            ["courses", _] => return None,
            [folder, file] => Self::Doc {
                folder: (*folder).to_owned(),
                file: (*file).to_owned(),
            },
            _ => return None,
        };
        Some(route)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocsIndex => f.write_str("/docs"),
            Self::CoursesIndex => f.write_str("/courses"),
            Self::BlogsIndex => f.write_str("/blogs"),
            Self::Doc { folder, file } => write!(f, "/{folder}/{file}"),
            Self::Course { course, file } => write!(f, "/courses/{course}/{file}"),
            Self::Blog { slug } => write!(f, "/blogs/{slug}"),
        }
    }
}
