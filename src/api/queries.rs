// src/api/queries.rs
//! GROQ queries owned by the pipeline.
//!
//! Projections are flattened at the query level (`"slug": slug.current`)
//! so the wire types in `responses.rs` stay one-to-one with what the
//! endpoint actually returns.

/// Approved posts, newest first — the blog listing collection.
pub const POST_SUMMARIES: &str = r#"*[_type == "post" && approved == true] | order(publishedAt desc){
  title,
  "slug": slug.current,
  excerpt,
  publishedAt,
  mainImage{ asset->{url}, alt },
  categories[]->{ title, "slug": slug.current }
}"#;

/// Featured projects by completion date — the projects listing collection.
pub const PROJECT_SUMMARIES: &str = r#"*[_type == "project" && featured == true] | order(date desc){
  title,
  "slug": slug.current,
  shortDescription,
  mainImage{ asset->{url}, alt },
  technologies,
  links,
  categories[]->{ title, "slug": slug.current }
}"#;

/// Categories referenced by at least one approved post, for the
/// listing sidebar. Title-sorted upstream so display order is stable.
pub const USED_CATEGORIES: &str = r#"*[_type == "category" &&
  count(*[_type == "post" && approved == true && references(^._id)]) > 0
] | order(title asc){
  title,
  "slug": slug.current,
  description
}"#;

/// One post with its full body, by slug.
pub const POST_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  title,
  "slug": slug.current,
  publishedAt,
  excerpt,
  mainImage{ asset->{url}, alt },
  body
}"#;

/// One project with its full description body, by slug.
pub const PROJECT_BY_SLUG: &str = r#"*[_type == "project" && slug.current == $slug][0]{
  title,
  "slug": slug.current,
  "publishedAt": date,
  "excerpt": shortDescription,
  mainImage{ asset->{url}, alt },
  "body": description
}"#;
