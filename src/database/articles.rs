use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_builder::{AstPass, Query, QueryFragment, QueryId};
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Text, Timestamp};

use crate::config;
use crate::errors::ApiError;
use crate::models::article::{Article, ArticleDetail, ArticleSummary, NewArticle};
use crate::schema::articles;

/// Sortable columns of the article listing. Each variant renders as exactly
/// one pre-approved SQL token; client input only ever selects a variant, so
/// no client text reaches the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    Topic,
    Author,
    Body,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "title" => Some(SortField::Title),
            "topic" => Some(SortField::Topic),
            "author" => Some(SortField::Author),
            "body" => Some(SortField::Body),
            "created_at" => Some(SortField::CreatedAt),
            "votes" => Some(SortField::Votes),
            "comment_count" => Some(SortField::CommentCount),
            _ => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortField::Title => "articles.title",
            SortField::Topic => "articles.topic",
            SortField::Author => "articles.author",
            SortField::Body => "articles.body",
            SortField::CreatedAt => "articles.created_at",
            SortField::Votes => "articles.votes",
            // The output-column alias; the underlying aggregate is not a
            // column of `articles`.
            SortField::CommentCount => "comment_count",
        }
    }
}

/// Sort direction, case-sensitive as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Raw listing parameters as they arrive from the query string.
#[derive(Debug, Default)]
pub struct ListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

/// The article listing, built clause by clause the same way Diesel's own
/// constructs do: fixed SQL text and whitelist tokens go through
/// `push_sql`, every client-supplied value through `push_bind_param`.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    topic: Option<String>,
    sort_by: SortField,
    order: SortOrder,
    limit: i64,
    offset: i64,
}

// The SQL shape varies with the parameters (optional WHERE, ORDER BY
// tokens), so the statement must not be cached under a static id.
impl QueryId for ArticleListing {
    type QueryId = ();
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl QueryFragment<Pg> for ArticleListing {
    fn walk_ast<'b>(&'b self, mut out: AstPass<'_, 'b, Pg>) -> QueryResult<()> {
        out.push_sql(
            "SELECT articles.article_id, articles.title, articles.author, \
             articles.topic, articles.created_at, articles.votes, \
             COUNT(comments.article_id)::INTEGER AS comment_count \
             FROM articles \
             LEFT JOIN comments ON articles.article_id = comments.article_id",
        );
        if let Some(topic) = &self.topic {
            out.push_sql(" WHERE articles.topic = ");
            out.push_bind_param::<Text, _>(topic)?;
        }
        out.push_sql(" GROUP BY articles.article_id ORDER BY ");
        out.push_sql(self.sort_by.as_sql());
        out.push_sql(" ");
        out.push_sql(self.order.as_sql());
        out.push_sql(" LIMIT ");
        out.push_bind_param::<BigInt, _>(&self.limit)?;
        out.push_sql(" OFFSET ");
        out.push_bind_param::<BigInt, _>(&self.offset)?;
        Ok(())
    }
}

impl Query for ArticleListing {
    type SqlType = (Integer, Text, Text, Text, Timestamp, Integer, Integer);
}

impl RunQueryDsl<PgConnection> for ArticleListing {}

/// Validates the raw parameters and runs the listing query.
///
/// A known topic with no matching articles yields an empty vec, not an
/// error; only an unknown topic is rejected.
pub fn list(conn: &mut PgConnection, params: ListParams) -> Result<Vec<ArticleSummary>, ApiError> {
    let sort_by = match params.sort_by.as_deref() {
        None => SortField::default(),
        Some(raw) => SortField::parse(raw).ok_or_else(|| ApiError::not_found("Invalid sort_by"))?,
    };
    let order = match params.order.as_deref() {
        None => SortOrder::default(),
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| ApiError::not_found("Invalid order"))?,
    };
    if let Some(topic) = params.topic.as_deref() {
        if !super::topics::exists(conn, topic)? {
            return Err(ApiError::not_found("Invalid Topic"));
        }
    }

    let limit = params.limit.unwrap_or(config::DEFAULT_PAGE_SIZE).max(1);
    // Without an explicit page the first page is still capped at `limit`.
    let offset = params.page.map_or(0, |page| (page.max(1) - 1) * limit);

    ArticleListing {
        topic: params.topic,
        sort_by,
        order,
        limit,
        offset,
    }
    .load::<ArticleSummary>(conn)
    .map_err(ApiError::from)
}

const ARTICLE_DETAIL_SQL: &str = "SELECT articles.article_id, articles.title, \
    articles.author, articles.topic, articles.body, articles.created_at, \
    articles.votes, COUNT(comments.article_id)::INTEGER AS comment_count \
    FROM articles \
    LEFT JOIN comments ON articles.article_id = comments.article_id \
    WHERE articles.article_id = $1 \
    GROUP BY articles.article_id";

pub fn find(conn: &mut PgConnection, article_id: i32) -> Result<ArticleDetail, ApiError> {
    sql_query(ARTICLE_DETAIL_SQL)
        .bind::<Integer, _>(article_id)
        .get_result::<ArticleDetail>(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("No Article Found."))
}

pub fn create(conn: &mut PgConnection, new_article: NewArticle) -> Result<Article, ApiError> {
    diesel::insert_into(articles::table)
        .values(&new_article)
        .get_result::<Article>(conn)
        .map_err(ApiError::from)
}

/// `votes += delta`, evaluated by Postgres in a single statement so that
/// concurrent increments to the same row cannot lose updates.
pub fn update_votes(
    conn: &mut PgConnection,
    article_id: i32,
    delta: i32,
) -> Result<Article, ApiError> {
    use crate::schema::articles::dsl;

    diesel::update(articles::table.find(article_id))
        .set(dsl::votes.eq(dsl::votes + delta))
        .get_result::<Article>(conn)
        .optional()?
        .ok_or_else(|| ApiError::not_found("No Article Found."))
}

/// Removes an article; its comments go with it via the store's
/// ON DELETE CASCADE policy.
pub fn delete(conn: &mut PgConnection, article_id: i32) -> Result<(), ApiError> {
    let deleted = diesel::delete(articles::table.find(article_id)).execute(conn)?;
    if deleted == 0 {
        return Err(ApiError::not_found("Article Not Found"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_whitelist() {
        for raw in [
            "title",
            "topic",
            "author",
            "body",
            "created_at",
            "votes",
            "comment_count",
        ] {
            assert!(SortField::parse(raw).is_some(), "{raw} should be sortable");
        }
        assert_eq!(SortField::parse("article_id"), None);
        assert_eq!(SortField::parse("votes; DROP TABLE articles"), None);
        assert_eq!(SortField::parse(""), None);
        assert_eq!(SortField::default(), SortField::CreatedAt);
    }

    #[test]
    fn sort_order_is_case_sensitive() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("DESC"), Some(SortOrder::Desc));
        assert_eq!(SortOrder::parse("asc"), None);
        assert_eq!(SortOrder::parse("descending"), None);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    fn listing(topic: Option<&str>, sort_by: SortField, order: SortOrder) -> ArticleListing {
        ArticleListing {
            topic: topic.map(String::from),
            sort_by,
            order,
            limit: 10,
            offset: 0,
        }
    }

    #[test]
    fn listing_sql_without_topic_has_no_where_clause() {
        let sql = diesel::debug_query::<Pg, _>(&listing(
            None,
            SortField::default(),
            SortOrder::default(),
        ))
        .to_string();
        assert!(sql.contains("LEFT JOIN comments"));
        assert!(sql.contains("GROUP BY articles.article_id"));
        assert!(sql.contains("ORDER BY articles.created_at DESC"));
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn listing_sql_binds_topic_instead_of_interpolating() {
        let sql = diesel::debug_query::<Pg, _>(&listing(
            Some("cats'; DROP TABLE articles; --"),
            SortField::Votes,
            SortOrder::Asc,
        ))
        .to_string();
        assert!(sql.contains("WHERE articles.topic = $1"));
        assert!(sql.contains("ORDER BY articles.votes ASC"));
        // The topic only appears in the bind list, never in the SQL text.
        let (text, binds) = sql.split_once("-- binds").expect("debug output lists binds");
        assert!(!text.contains("DROP TABLE"));
        assert!(binds.contains("DROP TABLE"));
    }

    #[test]
    fn listing_sql_orders_by_the_aggregate_alias() {
        let sql = diesel::debug_query::<Pg, _>(&listing(
            None,
            SortField::CommentCount,
            SortOrder::Desc,
        ))
        .to_string();
        assert!(sql.contains("ORDER BY comment_count DESC"));
    }

    #[test]
    fn pagination_is_bound_limit_and_offset() {
        let query = ArticleListing {
            topic: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            limit: 5,
            offset: 10,
        };
        let sql = diesel::debug_query::<Pg, _>(&query).to_string();
        assert!(sql.contains("LIMIT $1 OFFSET $2"));
    }
}
