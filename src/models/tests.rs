//! Tests for the typed records

use super::*;
use crate::decode::decode_value;
use crate::error::Error;
use chrono::NaiveDate;
use serde_json::{json, Value};
use test_case::test_case;

fn movie_json() -> Value {
    json!({
        "adult": false,
        "backdrop_path": "/back.jpg",
        "genre_ids": [28, 12],
        "id": 603,
        "original_language": "en",
        "original_title": "The Matrix",
        "overview": "Set in the 22nd century...",
        "popularity": 74.5,
        "poster_path": "/poster.jpg",
        "release_date": "1999-03-30",
        "title": "The Matrix",
        "video": false,
        "vote_average": 8.2,
        "vote_count": 25000
    })
}

fn tv_json() -> Value {
    json!({
        "backdrop_path": null,
        "first_air_date": "2008-01-20",
        "genre_ids": [18],
        "id": 1396,
        "name": "Breaking Bad",
        "origin_country": ["US"],
        "original_language": "en",
        "original_name": "Breaking Bad",
        "overview": "Walter White turns to crime...",
        "popularity": 300.1,
        "poster_path": "/bb.jpg",
        "vote_average": 8.9,
        "vote_count": 13000
    })
}

fn episode_json(number: u32) -> Value {
    json!({
        "id": 62085 + number,
        "name": format!("Episode {number}"),
        "overview": "",
        "vote_average": 8.0,
        "vote_count": 100,
        "air_date": "2008-01-20",
        "episode_number": number,
        "production_code": "",
        "runtime": 58,
        "season_number": 1,
        "show_id": 1396,
        "still_path": "/still.jpg"
    })
}

fn crew_json() -> Value {
    json!({
        "adult": false,
        "gender": 2,
        "id": 66633,
        "known_for_department": "Writing",
        "name": "Vince Gilligan",
        "original_name": "Vince Gilligan",
        "popularity": 10.0,
        "profile_path": null,
        "credit_id": "52542275760ee313280006ce",
        "department": "Writing",
        "job": "Writer"
    })
}

fn cast_json() -> Value {
    json!({
        "adult": false,
        "gender": 2,
        "id": 17419,
        "known_for_department": "Acting",
        "name": "Bryan Cranston",
        "original_name": "Bryan Cranston",
        "popularity": 50.0,
        "profile_path": "/bc.jpg",
        "character": "Walter White",
        "credit_id": "52542282760ee313280017f9",
        "order": 0
    })
}

// ============================================================================
// Image URLs
// ============================================================================

#[test]
fn test_image_url() {
    assert_eq!(
        image_url("/kqjL17yufvn9OVLyXYpvtyrFfak.jpg", "w500"),
        "https://image.tmdb.org/t/p/w500/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
    );
}

#[test_case(Some("/p.jpg") => Some("https://image.tmdb.org/t/p/original/p.jpg".to_string()) ; "present")]
#[test_case(Some("") => None ; "empty")]
#[test_case(None => None ; "absent")]
fn test_optional_image_url(path: Option<&str>) -> Option<String> {
    optional_image_url(path)
}

// ============================================================================
// Listing items
// ============================================================================

#[test]
fn test_movie_decodes() {
    let movie: Movie = decode_value(movie_json()).unwrap();

    assert_eq!(movie.id, 603);
    assert_eq!(movie.release_date, NaiveDate::from_ymd_opt(1999, 3, 30));
    assert_eq!(movie.genre_ids, vec![28, 12]);
    assert_eq!(
        movie.poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/poster.jpg")
    );
    assert_eq!(
        movie.backdrop_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/back.jpg")
    );
}

#[test_case(json!("") ; "empty string")]
#[test_case(json!(null) ; "null")]
fn test_movie_unknown_release_date(date: Value) {
    let mut raw = movie_json();
    raw["release_date"] = date;
    let movie: Movie = decode_value(raw).unwrap();
    assert_eq!(movie.release_date, None);
}

#[test]
fn test_movie_absent_release_date_key_is_rejected() {
    let mut raw = movie_json();
    raw.as_object_mut().unwrap().remove("release_date");

    let err = decode_value::<Movie>(raw).unwrap_err();
    match err {
        Error::Decode { message, .. } => assert!(message.contains("release_date")),
        other => panic!("Expected Decode, got {other:?}"),
    }
}

#[test]
fn test_tv_series_absent_first_air_date_key_is_rejected() {
    let mut raw = tv_json();
    raw.as_object_mut().unwrap().remove("first_air_date");

    assert!(matches!(
        decode_value::<TvSeries>(raw),
        Err(Error::Decode { .. })
    ));
}

#[test]
fn test_movie_malformed_release_date_is_rejected() {
    let mut raw = movie_json();
    raw["release_date"] = json!("30/03/1999");

    let err = decode_value::<Movie>(raw).unwrap_err();
    assert!(matches!(err, Error::Decode { ref path, .. } if path == "release_date"));
}

#[test]
fn test_movie_missing_required_field_is_rejected() {
    let mut raw = movie_json();
    raw.as_object_mut().unwrap().remove("title");

    let err = decode_value::<Movie>(raw).unwrap_err();
    match err {
        Error::Decode { message, .. } => assert!(message.contains("title")),
        other => panic!("Expected Decode, got {other:?}"),
    }
}

#[test]
fn test_tv_series_decodes() {
    let series: TvSeries = decode_value(tv_json()).unwrap();

    assert_eq!(series.name, "Breaking Bad");
    assert_eq!(series.first_air_date, NaiveDate::from_ymd_opt(2008, 1, 20));
    assert_eq!(series.origin_country, vec!["US".to_string()]);
    assert_eq!(series.backdrop_url(), None);
}

// ============================================================================
// Multi search
// ============================================================================

#[test]
fn test_multi_search_result_variants() {
    let mut movie = movie_json();
    movie["media_type"] = json!("movie");
    let mut tv = tv_json();
    tv["media_type"] = json!("tv");
    let person = json!({
        "media_type": "person",
        "id": 287,
        "name": "Brad Pitt",
        "profile_path": "/brad.jpg",
        "known_for_department": "Acting",
        "popularity": 20.5
    });

    let movie: MultiSearchResult = decode_value(movie).unwrap();
    let tv: MultiSearchResult = decode_value(tv).unwrap();
    let person: MultiSearchResult = decode_value(person).unwrap();

    assert_eq!(movie.display_name(), "The Matrix");
    assert_eq!(movie.as_movie().map(|m| m.id), Some(603));
    assert_eq!(tv.id(), 1396);
    assert!(tv.as_tv().is_some());
    assert_eq!(person.display_name(), "Brad Pitt");
    assert!(person.as_movie().is_none());
    assert_eq!(
        person.as_person().and_then(PersonSummary::profile_url).as_deref(),
        Some("https://image.tmdb.org/t/p/original/brad.jpg")
    );
}

#[test]
fn test_multi_search_unknown_media_type_is_rejected() {
    let err = decode_value::<MultiSearchResult>(json!({
        "media_type": "collection",
        "id": 1,
        "name": "x"
    }))
    .unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_multi_search_serializes_tag() {
    let movie: MultiSearchResult = decode_value({
        let mut m = movie_json();
        m["media_type"] = json!("movie");
        m
    })
    .unwrap();

    let value = serde_json::to_value(&movie).unwrap();
    assert_eq!(value["media_type"], "movie");
    assert_eq!(value["release_date"], "1999-03-30");
}

// ============================================================================
// Details
// ============================================================================

#[test]
fn test_movie_details_decodes() {
    let details: MovieDetails = decode_value(json!({
        "adult": false,
        "backdrop_path": "/b.jpg",
        "budget": 63_000_000,
        "genres": [{"id": 28, "name": "Action"}],
        "homepage": "http://www.warnerbros.com/matrix",
        "id": 603,
        "imdb_id": "tt0133093",
        "original_language": "en",
        "original_title": "The Matrix",
        "overview": "Set in the 22nd century...",
        "popularity": 74.5,
        "poster_path": null,
        "production_companies": [
            {"id": 79, "logo_path": "/wb.png", "name": "Village Roadshow", "origin_country": "US"}
        ],
        "production_countries": [{"iso_3166_1": "US", "name": "United States of America"}],
        "release_date": "1999-03-30",
        "revenue": 463_517_383,
        "runtime": 136,
        "spoken_languages": [{"english_name": "English", "iso_639_1": "en", "name": "English"}],
        "status": "Released",
        "tagline": "Welcome to the Real World.",
        "title": "The Matrix",
        "video": false,
        "vote_average": 8.2,
        "vote_count": 25000
    }))
    .unwrap();

    assert_eq!(details.runtime, Some(136));
    assert_eq!(details.genres, vec![Genre { id: 28, name: "Action".to_string() }]);
    assert_eq!(details.poster_url(), None);
    assert_eq!(
        details.imdb_url().as_deref(),
        Some("https://www.imdb.com/title/tt0133093/")
    );
    assert_eq!(
        details.production_companies[0].logo_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/wb.png")
    );
}

#[test]
fn test_tv_series_details_decodes() {
    let details: TvSeriesDetails = decode_value(json!({
        "backdrop_path": "/b.jpg",
        "created_by": [{
            "id": 66633, "credit_id": "52542286760ee31328001a7b",
            "name": "Vince Gilligan", "gender": 2, "profile_path": null
        }],
        "episode_run_time": [45, 47],
        "first_air_date": "2008-01-20",
        "genres": [{"id": 18, "name": "Drama"}],
        "homepage": "https://www.sonypictures.com/tv/breakingbad",
        "id": 1396,
        "in_production": false,
        "languages": ["en"],
        "last_air_date": "2013-09-29",
        "last_episode_to_air": episode_json(62),
        "next_episode_to_air": null,
        "name": "Breaking Bad",
        "networks": [{"id": 174, "logo_path": "/amc.png", "name": "AMC", "origin_country": "US"}],
        "number_of_episodes": 62,
        "number_of_seasons": 5,
        "origin_country": ["US"],
        "original_language": "en",
        "original_name": "Breaking Bad",
        "overview": "Walter White turns to crime...",
        "popularity": 300.1,
        "poster_path": "/bb.jpg",
        "production_companies": [],
        "production_countries": [],
        "seasons": [{
            "air_date": "2008-01-20", "episode_count": 7, "id": 3572,
            "name": "Season 1", "overview": "", "poster_path": null,
            "season_number": 1, "vote_average": 8.3
        }],
        "spoken_languages": [{"english_name": "English", "iso_639_1": "en", "name": "English"}],
        "status": "Ended",
        "tagline": "Remember my name",
        "type": "Scripted",
        "vote_average": 8.9,
        "vote_count": 13000
    }))
    .unwrap();

    assert_eq!(details.kind, "Scripted");
    assert_eq!(details.last_air_date, NaiveDate::from_ymd_opt(2013, 9, 29));
    assert!(details.next_episode_to_air.is_none());
    assert_eq!(
        details.last_episode_to_air.as_ref().map(TvSeriesEpisode::code).as_deref(),
        Some("S01E62")
    );
    assert_eq!(details.seasons[0].episode_count, Some(7));
    assert_eq!(details.created_by[0].profile_url(), None);
}

#[test]
fn test_season_details_flattens_season() {
    let mut first = episode_json(1);
    first["crew"] = json!([crew_json()]);
    first["guest_stars"] = json!([cast_json()]);

    let season: SeasonDetails = decode_value(json!({
        "_id": "5256c8c219c2956ff604858a",
        "air_date": "2008-01-20",
        "episodes": [first, episode_json(2)],
        "name": "Season 1",
        "overview": "Walt starts cooking...",
        "id": 3572,
        "poster_path": "/s1.jpg",
        "season_number": 1,
        "vote_average": 8.3
    }))
    .unwrap();

    assert_eq!(season.season.id, 3572);
    assert_eq!(season.season.episode_count, None);
    assert_eq!(season.episodes.len(), 2);
    assert_eq!(
        season.poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/s1.jpg")
    );

    let pilot = season.episode(1).unwrap();
    assert_eq!(pilot.crew[0].job.as_deref(), Some("Writer"));
    assert_eq!(pilot.guest_stars[0].character, "Walter White");
    assert!(season.episode(2).unwrap().crew.is_empty());
    assert!(season.episode(3).is_none());
}

// ============================================================================
// Media, credits, certifications
// ============================================================================

#[test]
fn test_images_decode() {
    let images: MovieImages = decode_value(json!({
        "backdrops": [],
        "logos": [],
        "posters": [{
            "aspect_ratio": 0.667,
            "height": 3000,
            "iso_639_1": null,
            "file_path": "/p.jpg",
            "vote_average": 5.3,
            "vote_count": 4,
            "width": 2000
        }]
    }))
    .unwrap();

    let poster = &images.posters[0];
    assert_eq!(poster.iso_639_1, None);
    assert_eq!(poster.url(), "https://image.tmdb.org/t/p/original/p.jpg");
    assert_eq!(poster.sized_url("w342"), "https://image.tmdb.org/t/p/w342/p.jpg");
}

#[test]
fn test_video_decodes() {
    let video: MediaVideo = decode_value(json!({
        "iso_639_1": "en",
        "iso_3166_1": "US",
        "name": "Official Trailer",
        "key": "vKQi3bBA1y8",
        "site": "YouTube",
        "size": 1080,
        "type": "Trailer",
        "official": true,
        "published_at": "2021-10-21T17:00:07.000Z",
        "id": "6171afcf8c44b9002a7c1e2c"
    }))
    .unwrap();

    assert_eq!(video.kind, "Trailer");
    assert_eq!(video.published_at.to_rfc3339(), "2021-10-21T17:00:07+00:00");
}

#[test]
fn test_credits_crew_with_job() {
    let mut director = crew_json();
    director["job"] = json!("Director");
    director["id"] = json!(1);

    let credits: MovieCredits = decode_value(json!({
        "id": 603,
        "cast": [cast_json()],
        "crew": [crew_json(), director]
    }))
    .unwrap();

    let directors: Vec<u64> = credits.crew_with_job("Director").map(|c| c.id).collect();
    assert_eq!(directors, vec![1]);
    assert_eq!(credits.cast[0].order, Some(0));
}

#[test]
fn test_certifications_by_country() {
    let certs: Certifications = decode_value(json!({
        "certifications": {
            "US": [
                {"certification": "G", "meaning": "All ages admitted.", "order": 1},
                {"certification": "R", "meaning": "Under 17 requires parent.", "order": 4}
            ],
            "DE": []
        }
    }))
    .unwrap();

    let us = certs.for_country("US").unwrap();
    assert_eq!(us.len(), 2);
    assert_eq!(us[1].certification, "R");
    assert_eq!(certs.for_country("DE"), Some(&[][..]));
    assert!(certs.for_country("FR").is_none());
}
