//! # Wire Conventions
//!
//! Reference notes for the JSON surface; nothing in here executes.
//!
//! ## Envelopes
//!
//! Success responses wrap their payload:
//! - `{ "success": true, "data": ..., "message": "..." }` — `message` only
//!   appears when there is something to say (registration confirmation,
//!   demo fallback notice).
//!
//! Errors come in two shapes:
//! - `{ "error": "..." }` for a single failure (auth, not-found, referential
//!   mismatches on booking creation, unexpected failures)
//! - `{ "errors": ["...", ...] }` for itemized field validation
//!
//! ## Search parameters
//!
//! All optional, camelCase, flat on the query string:
//! `query`, `latitude`, `longitude`, `radius` (km, default 10), `category`,
//! `minPrice`, `maxPrice`, `minRating` (default 0),
//! `sortBy` (`distance|rating|price|name`, default `distance`),
//! `page` (default 1), `limit` (default 10).
//!
//! `latitude`/`longitude` must both be present for distances to appear in
//! results; without them nothing is distance-filtered.
//!
//! ## Tokens
//!
//! `Authorization: Bearer <jwt>`. Claims: `id`, `email`, `role`, `exp`.
//! Expiry defaults to 7 days. Tokens for deleted accounts are rejected even
//! before expiry.
//!
//! ## Dates
//!
//! RFC 3339 / ISO 8601 strings in UTC, both directions. The booking
//! `datetime` accepts any RFC 3339 offset and is normalized to UTC.
//!
//! ## Known quirks served as-is
//!
//! - Salon search paginates at the fetch stage and filters afterwards, so a
//!   short page does not mean the listing is exhausted, and
//!   `pagination.total` counts the current page after filtering, not the
//!   whole catalog.
//! - `nextAvailable` on search results is a placeholder (now + 24h), not a
//!   schedule computation.
