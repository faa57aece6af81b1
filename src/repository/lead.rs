//! Repository implementation for sales leads.

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::lead::{Lead, NewLead};
use crate::models::lead::{Lead as DbLead, NewLead as DbNewLead};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, LeadListQuery, LeadReader, LeadWriter};

/// `LIKE` pattern matching `term` literally anywhere in the column.
fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl LeadReader for DieselRepository {
    fn list_leads(&self, query: LeadListQuery) -> RepositoryResult<(usize, Vec<Lead>)> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = leads::table
                .filter(leads::organization_id.eq(query.organization_id.get()))
                .into_boxed::<Sqlite>();

            if let Some(status) = query.status {
                items = items.filter(leads::status.eq(status.as_str()));
            }

            if let Some(term) = &query.search {
                let pattern = contains_pattern(term);
                items = items.filter(
                    leads::first_name
                        .like(pattern.clone())
                        .escape('\\')
                        .or(leads::last_name.like(pattern.clone()).escape('\\'))
                        .or(leads::email.like(pattern.clone()).escape('\\'))
                        .or(leads::company
                            .assume_not_null()
                            .like(pattern)
                            .escape('\\')),
                );
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder().order((leads::created_at.desc(), leads::id.desc()));
        if let Some(pagination) = &query.pagination {
            items = items
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX))
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX));
        }

        let leads = items
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Lead::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)?;

        Ok((total, leads))
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, lead: &NewLead) -> RepositoryResult<Lead> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let insertable: DbNewLead = lead.into();

        let db_lead = diesel::insert_into(leads::table)
            .values(&insertable)
            .get_result::<DbLead>(&mut conn)?;

        Lead::try_from(db_lead).map_err(RepositoryError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn search_wildcards_are_escaped() {
        assert_eq!(contains_pattern("acme"), "%acme%");
        assert_eq!(contains_pattern("50%_off"), r"%50\%\_off%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
