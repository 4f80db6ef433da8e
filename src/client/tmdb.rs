//! Endpoint bindings

use super::types::{MovieSearch, TvSearch};
use crate::config::ClientConfig;
use crate::decode::{decode_list_field, decode_value};
use crate::error::{Error, Result};
use crate::http::{HttpClient, Transport, LANGUAGE_PARAM};
use crate::models::{
    Certifications, EpisodeDetails, EpisodeImages, Genre, MediaVideo, Movie, MovieCredits,
    MovieDetails, MovieImages, MultiSearchResult, SeasonDetails, SeasonImages, TvSeries,
    TvSeriesCredits, TvSeriesDetails, TvSeriesImages,
};
use crate::pagination::{Endpoint, PageBounds, Paginator};
use crate::types::{MediaKind, QueryParams};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Typed client for the TMDb v3 API
///
/// Cheap to share behind an `Arc`; paginators it hands out hold their own
/// handle to the transport and outlive the borrow that created them.
pub struct TmdbClient {
    transport: Arc<dyn Transport>,
    page_bounds: PageBounds,
    movie_genres: RwLock<Option<Vec<Genre>>>,
    tv_genres: RwLock<Option<Vec<Genre>>>,
}

impl TmdbClient {
    /// Create a client talking HTTP according to `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpClient::new(config)?);
        Ok(Self::with_transport(transport, config.page_bounds))
    }

    /// Create a client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>, page_bounds: PageBounds) -> Self {
        Self {
            transport,
            page_bounds,
            movie_genres: RwLock::new(None),
            tv_genres: RwLock::new(None),
        }
    }

    /// The shared transport
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }

    /// Out-of-range policy given to every paginator
    pub fn page_bounds(&self) -> PageBounds {
        self.page_bounds
    }

    /// Paginator over any page-numbered endpoint
    pub fn paginate<T>(&self, endpoint: Endpoint) -> Paginator<T>
    where
        T: DeserializeOwned + 'static,
    {
        Paginator::typed(self.transport(), endpoint).with_bounds(self.page_bounds)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> Result<T> {
        let body = self.transport.get_json(path, query).await?;
        decode_value(body)
    }

    // ========================================================================
    // Discover and lists
    // ========================================================================

    /// `/discover/movie` with arbitrary filters (`sort_by`, `with_genres`, ...)
    pub fn discover_movies(&self, filters: QueryParams) -> Paginator<Movie> {
        self.paginate(Endpoint::with_params("/discover/movie", filters))
    }

    /// `/discover/tv` with arbitrary filters
    pub fn discover_tv_series(&self, filters: QueryParams) -> Paginator<TvSeries> {
        self.paginate(Endpoint::with_params("/discover/tv", filters))
    }

    /// `/movie/popular`
    pub fn popular_movies(&self) -> Paginator<Movie> {
        self.paginate(Endpoint::new("/movie/popular"))
    }

    /// `/movie/top_rated`
    pub fn top_rated_movies(&self) -> Paginator<Movie> {
        self.paginate(Endpoint::new("/movie/top_rated"))
    }

    /// `/movie/upcoming`, movies releasing soon
    pub fn upcoming_movies(&self) -> Paginator<Movie> {
        self.paginate(Endpoint::new("/movie/upcoming"))
    }

    /// `/movie/now_playing`, movies in theatres
    pub fn now_playing_movies(&self) -> Paginator<Movie> {
        self.paginate(Endpoint::new("/movie/now_playing"))
    }

    /// `/tv/popular`
    pub fn popular_tv_series(&self) -> Paginator<TvSeries> {
        self.paginate(Endpoint::new("/tv/popular"))
    }

    /// `/tv/top_rated`
    pub fn top_rated_tv_series(&self) -> Paginator<TvSeries> {
        self.paginate(Endpoint::new("/tv/top_rated"))
    }

    /// `/tv/airing_today`, series with an episode airing today
    pub fn airing_today_tv_series(&self) -> Paginator<TvSeries> {
        self.paginate(Endpoint::new("/tv/airing_today"))
    }

    /// `/tv/on_the_air`, series with an episode in the next seven days
    pub fn on_the_air_tv_series(&self) -> Paginator<TvSeries> {
        self.paginate(Endpoint::new("/tv/on_the_air"))
    }

    /// `/movie/{id}/similar`
    pub fn movie_similar(&self, movie_id: u64) -> Paginator<Movie> {
        self.paginate(Endpoint::new(format!("/movie/{movie_id}/similar")))
    }

    /// `/tv/{id}/similar`
    pub fn tv_similar(&self, series_id: u64) -> Paginator<TvSeries> {
        self.paginate(Endpoint::new(format!("/tv/{series_id}/similar")))
    }

    /// `/movie/{id}/recommendations`
    pub fn movie_recommendations(&self, movie_id: u64) -> Paginator<Movie> {
        self.paginate(Endpoint::new(format!("/movie/{movie_id}/recommendations")))
    }

    /// `/tv/{id}/recommendations`
    pub fn tv_recommendations(&self, series_id: u64) -> Paginator<TvSeries> {
        self.paginate(Endpoint::new(format!("/tv/{series_id}/recommendations")))
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// `/search/movie`; a plain `&str` searches by title alone
    pub fn search_movies(&self, search: impl Into<MovieSearch>) -> Paginator<Movie> {
        let search = search.into();
        self.paginate(Endpoint::with_params("/search/movie", search.to_params()))
    }

    /// `/search/tv`; a plain `&str` searches by name alone
    pub fn search_tv_series(&self, search: impl Into<TvSearch>) -> Paginator<TvSeries> {
        let search = search.into();
        self.paginate(Endpoint::with_params("/search/tv", search.to_params()))
    }

    /// Movies, series and people matching `query` in one listing
    pub fn search_multi(
        &self,
        query: impl Into<String>,
        include_adult: Option<bool>,
    ) -> Paginator<MultiSearchResult> {
        let params = QueryParams::new()
            .with("query", query.into())
            .with_opt("include_adult", include_adult);
        self.paginate(Endpoint::with_params("/search/multi", params))
    }

    // ========================================================================
    // Details
    // ========================================================================

    /// `/movie/{id}`
    pub async fn movie_details(&self, movie_id: u64) -> Result<MovieDetails> {
        self.get(&format!("/movie/{movie_id}"), &QueryParams::new())
            .await
    }

    /// `/tv/{id}`
    pub async fn tv_series_details(&self, series_id: u64) -> Result<TvSeriesDetails> {
        self.get(&format!("/tv/{series_id}"), &QueryParams::new())
            .await
    }

    /// `/tv/{id}/season/{n}`, including the season's episodes
    pub async fn season_details(&self, series_id: u64, season_number: u32) -> Result<SeasonDetails> {
        self.get(
            &format!("/tv/{series_id}/season/{season_number}"),
            &QueryParams::new(),
        )
        .await
    }

    /// `/tv/{id}/season/{n}/episode/{e}`
    pub async fn episode_details(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<EpisodeDetails> {
        self.get(
            &format!("/tv/{series_id}/season/{season_number}/episode/{episode_number}"),
            &QueryParams::new(),
        )
        .await
    }

    // ========================================================================
    // Images
    //
    // `Some(lang)` filters images by that language. `None` sends an empty
    // `language`, which returns every language and keeps the configured
    // default off the request.
    // ========================================================================

    /// `/movie/{id}/images`
    pub async fn movie_images(&self, movie_id: u64, language: Option<&str>) -> Result<MovieImages> {
        self.get(&format!("/movie/{movie_id}/images"), &image_query(language))
            .await
    }

    /// `/tv/{id}/images`
    pub async fn tv_images(&self, series_id: u64, language: Option<&str>) -> Result<TvSeriesImages> {
        self.get(&format!("/tv/{series_id}/images"), &image_query(language))
            .await
    }

    /// `/tv/{id}/season/{n}/images`
    pub async fn season_images(
        &self,
        series_id: u64,
        season_number: u32,
        language: Option<&str>,
    ) -> Result<SeasonImages> {
        self.get(
            &format!("/tv/{series_id}/season/{season_number}/images"),
            &image_query(language),
        )
        .await
    }

    /// `/tv/{id}/season/{n}/episode/{e}/images`
    pub async fn episode_images(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        language: Option<&str>,
    ) -> Result<EpisodeImages> {
        self.get(
            &format!("/tv/{series_id}/season/{season_number}/episode/{episode_number}/images"),
            &image_query(language),
        )
        .await
    }

    // ========================================================================
    // Videos and credits
    // ========================================================================

    /// `/movie/{id}/videos`
    pub async fn movie_videos(&self, movie_id: u64) -> Result<Vec<MediaVideo>> {
        self.get_list(&format!("/movie/{movie_id}/videos"), "results")
            .await
    }

    /// `/tv/{id}/videos`
    pub async fn tv_videos(&self, series_id: u64) -> Result<Vec<MediaVideo>> {
        self.get_list(&format!("/tv/{series_id}/videos"), "results")
            .await
    }

    /// `/movie/{id}/credits`
    pub async fn movie_credits(&self, movie_id: u64) -> Result<MovieCredits> {
        self.get(&format!("/movie/{movie_id}/credits"), &QueryParams::new())
            .await
    }

    /// `/tv/{id}/credits`
    pub async fn tv_credits(&self, series_id: u64) -> Result<TvSeriesCredits> {
        self.get(&format!("/tv/{series_id}/credits"), &QueryParams::new())
            .await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, field: &str) -> Result<Vec<T>> {
        let body = self.transport.get_json(path, &QueryParams::new()).await?;
        decode_list_field(body, field)
    }

    // ========================================================================
    // Genres
    // ========================================================================

    /// Fetch the genre list of `kind`, refreshing the cached copy
    pub async fn genres(&self, kind: MediaKind) -> Result<Vec<Genre>> {
        let genres: Vec<Genre> = self
            .get_list(&format!("/genre/{}/list", kind.as_path()), "genres")
            .await?;

        debug!(kind = %kind, count = genres.len(), "Genre list cached");
        *self.genre_cache(kind).write().await = Some(genres.clone());
        Ok(genres)
    }

    /// `/genre/movie/list`, refreshing the cache
    pub async fn movie_genres(&self) -> Result<Vec<Genre>> {
        self.genres(MediaKind::Movie).await
    }

    /// `/genre/tv/list`, refreshing the cache
    pub async fn tv_genres(&self) -> Result<Vec<Genre>> {
        self.genres(MediaKind::Tv).await
    }

    /// Look a genre up by id in the movie list, then the TV list
    ///
    /// Each list is fetched once, on first need, and served from the cache
    /// afterwards. Fails with `Error::GenreNotFound` when neither list has it.
    pub async fn genre(&self, id: u64) -> Result<Genre> {
        for kind in [MediaKind::Movie, MediaKind::Tv] {
            if let Some(genre) = self.find_cached_genre(kind, id).await? {
                return Ok(genre);
            }
        }
        Err(Error::GenreNotFound { id })
    }

    async fn find_cached_genre(&self, kind: MediaKind, id: u64) -> Result<Option<Genre>> {
        {
            let cache = self.genre_cache(kind).read().await;
            if let Some(genres) = cache.as_ref() {
                return Ok(genres.iter().find(|g| g.id == id).cloned());
            }
        }

        let genres = self.genres(kind).await?;
        Ok(genres.into_iter().find(|g| g.id == id))
    }

    fn genre_cache(&self, kind: MediaKind) -> &RwLock<Option<Vec<Genre>>> {
        match kind {
            MediaKind::Movie => &self.movie_genres,
            MediaKind::Tv => &self.tv_genres,
        }
    }

    // ========================================================================
    // Certifications
    // ========================================================================

    /// `/certification/movie/list`, grouped by country
    pub async fn movie_certifications(&self) -> Result<Certifications> {
        self.get("/certification/movie/list", &QueryParams::new())
            .await
    }

    /// `/certification/tv/list`, grouped by country
    pub async fn tv_certifications(&self) -> Result<Certifications> {
        self.get("/certification/tv/list", &QueryParams::new())
            .await
    }
}

fn image_query(language: Option<&str>) -> QueryParams {
    QueryParams::new().with(LANGUAGE_PARAM, language.unwrap_or(""))
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("page_bounds", &self.page_bounds)
            .finish_non_exhaustive()
    }
}
