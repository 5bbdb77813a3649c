use serde::{Deserialize, Serialize};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// One movie as returned by the TMDB list endpoints. Identity is `id`;
/// everything else is display data and may be absent or null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
}

/// The single-movie endpoint returns a richer payload; only the fields the
/// catalog actually displays are decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetail {
    pub id: i32,
    pub title: String,
    pub overview: Option<String>,
    pub vote_average: Option<f32>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
}

/// Envelope wrapping the list endpoints: `{ "results": [...] }`.
#[derive(Debug, Deserialize)]
pub struct MovieListResponse {
    pub results: Vec<Movie>,
}

impl Movie {
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path.as_ref().map(|p| format!("{IMAGE_BASE}{p}"))
    }
}

impl MovieDetail {
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path.as_ref().map(|p| format!("{IMAGE_BASE}{p}"))
    }
}

impl From<MovieDetail> for Movie {
    fn from(detail: MovieDetail) -> Self {
        Movie {
            id: detail.id,
            title: detail.title,
            overview: detail.overview,
            vote_average: detail.vote_average,
            release_date: detail.release_date,
            poster_path: detail.poster_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_with_null_and_missing_fields() {
        let json = r#"{"results":[{"id":1,"title":"A","poster_path":null}]}"#;
        let response: MovieListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
        let movie = &response.results[0];
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "A");
        assert_eq!(movie.overview, None);
        assert_eq!(movie.vote_average, None);
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn ignores_fields_the_catalog_does_not_consume() {
        let json = r#"{"id":2,"title":"B","runtime":131,"budget":160000000,"genres":[{"id":28,"name":"Action"}]}"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id, 2);
        assert_eq!(detail.title, "B");
    }

    #[test]
    fn poster_url_concatenates_base_and_path() {
        let movie = Movie {
            id: 1,
            title: "A".to_string(),
            overview: None,
            vote_average: None,
            release_date: None,
            poster_path: Some("/abc.jpg".to_string()),
        };
        assert_eq!(
            movie.poster_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[test]
    fn poster_url_is_none_without_a_path() {
        let movie = Movie {
            id: 1,
            title: "A".to_string(),
            overview: None,
            vote_average: None,
            release_date: None,
            poster_path: None,
        };
        assert_eq!(movie.poster_url(), None);
    }

    #[test]
    fn detail_converts_to_summary_keeping_every_field() {
        let detail = MovieDetail {
            id: 7,
            title: "Seven".to_string(),
            overview: Some("overview".to_string()),
            vote_average: Some(8.3),
            release_date: Some("1995-09-22".to_string()),
            poster_path: Some("/seven.jpg".to_string()),
        };
        let movie = Movie::from(detail.clone());
        assert_eq!(movie.id, detail.id);
        assert_eq!(movie.title, detail.title);
        assert_eq!(movie.overview, detail.overview);
        assert_eq!(movie.vote_average, detail.vote_average);
        assert_eq!(movie.release_date, detail.release_date);
        assert_eq!(movie.poster_path, detail.poster_path);
    }
}
