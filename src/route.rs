//! Hash-fragment route parsing for the signup shell.

/// The views of the single-page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Form,
    About,
    NotFound,
}

impl Route {
    /// Parses a location-hash fragment (`"#/form"`, `"/form"`, `""`, ...).
    ///
    /// The path is the leading slash plus the longest run of word characters
    /// or dashes; anything after it is ignored. A fragment with no path at
    /// all falls back to `Home`; a path with no matching view is `NotFound`.
    pub fn parse(hash: &str) -> Route {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        if !fragment.starts_with('/') {
            return Route::Home;
        }
        let path_len: usize = fragment[1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .map(char::len_utf8)
            .sum();
        match &fragment[..1 + path_len] {
            "/" => Route::Home,
            "/form" => Route::Form,
            "/about" => Route::About,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Form => "/form",
            Route::About => "/about",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Form => "Create Account",
            Route::About => "About",
            Route::NotFound => "Not Found",
        }
    }

    /// Window title for this view.
    pub fn document_title(&self) -> String {
        format!("{} - Signup Demo", self.title())
    }
}
