use crate::models::Movie;

/// Console listing of the whole catalog, in insertion order.
pub fn render_listing(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies registered.\n".to_string();
    }

    let mut out = String::from("===== Movies =====\n");
    for movie in movies {
        out.push_str(&movie.to_string());
        out.push_str("===================================\n");
    }
    out
}
