use chrono::NaiveDate;
use entity::song;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, QueryTrait, SqlErr,
};

use crate::error::RepositoryError;
use crate::model::Song;

type Result<T> = std::result::Result<T, RepositoryError>;

/// Optional predicates for [`get_filtered`]. A `None` dimension places no
/// constraint; active dimensions are ANDed together. Both date bounds are
/// inclusive.
#[derive(Debug, Default, Clone)]
pub struct SongFilter {
    pub name: Option<String>,
    pub artist: Option<String>,
    pub after: Option<NaiveDate>,
    pub before: Option<NaiveDate>,
}

/// Inserts the song when `id` is `None`, writing the generated id back onto
/// it; updates all fields of the existing row otherwise. Returns the row as
/// persisted.
pub async fn save(
    db: &DatabaseConnection,
    song: &mut Song,
) -> Result<song::Model> {
    let model = song::ActiveModel::from(&*song);

    match song.id {
        Some(id) => {
            tracing::debug!(id, "updating song");
            song::Entity::update(model)
                .exec(db)
                .await
                .map_err(|err| map_write_err(err, song, Some(id)))
        }
        None => {
            tracing::debug!(name = %song.name, artist = %song.artist, "inserting song");
            let inserted = song::Entity::insert(model)
                .exec_with_returning(db)
                .await
                .map_err(|err| map_write_err(err, song, None))?;
            song.id = Some(inserted.id);
            Ok(inserted)
        }
    }
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    id: i32,
) -> Result<song::Model> {
    song::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(RepositoryError::SongNotFound { id })
}

/// Every song, ordered by id ascending.
pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<song::Model>> {
    song::Entity::find()
        .order_by_asc(song::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Songs matching all active filter dimensions, ordered by id ascending,
/// then sliced by `offset`/`limit`. Every value is bound as a statement
/// parameter by the query builder.
pub async fn get_filtered(
    db: &DatabaseConnection,
    filter: &SongFilter,
    offset: u64,
    limit: u64,
) -> Result<Vec<song::Model>> {
    tracing::debug!(?filter, offset, limit, "fetching filtered songs");

    song::Entity::find()
        .apply_if(filter.name.clone(), |query, name| {
            query.filter(song::Column::Name.eq(name))
        })
        .apply_if(filter.artist.clone(), |query, artist| {
            query.filter(song::Column::Artist.eq(artist))
        })
        .apply_if(filter.after, |query, after| {
            query.filter(song::Column::ReleaseDate.gte(after))
        })
        .apply_if(filter.before, |query, before| {
            query.filter(song::Column::ReleaseDate.lte(before))
        })
        .order_by_asc(song::Column::Id)
        .offset(offset)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<()> {
    let result = song::Entity::delete_by_id(id).exec(db).await?;

    if result.rows_affected == 0 {
        return Err(RepositoryError::SongNotFound { id });
    }

    Ok(())
}

fn map_write_err(
    err: DbErr,
    song: &Song,
    id: Option<i32>,
) -> RepositoryError {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return RepositoryError::Duplicate {
            name: song.name.clone(),
            artist: song.artist.clone(),
        };
    }

    match (err, id) {
        (DbErr::RecordNotUpdated, Some(id)) => {
            RepositoryError::SongNotFound { id }
        }
        (err, _) => RepositoryError::Database(err),
    }
}
