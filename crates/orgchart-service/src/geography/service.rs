//! CRUD over the country / state / city containment chain.
//!
//! A parent can only be deleted once it has no children, regardless of the
//! children's status.

use validator::Validate;

use orgchart_core::result::AppResult;
use orgchart_core::types::{CityId, CountryId, StateId};
use orgchart_entity::geography::{
    CreateCity, CreateCountry, CreateState, GeoCity, GeoCountry, GeoState, UpdateCity,
    UpdateCountry, UpdateState,
};
use orgchart_store::OrgStore;

use crate::context::RequestContext;
use crate::crud;
use crate::guard::rules;

/// Manages the geography tables.
#[derive(Debug, Clone)]
pub struct GeographyService {
    /// Shared store.
    store: OrgStore,
}

impl GeographyService {
    /// Creates a new geography service.
    pub fn new(store: OrgStore) -> Self {
        Self { store }
    }

    // -- Countries --

    /// Lists countries in insertion order.
    pub async fn list_countries(&self) -> Vec<GeoCountry> {
        crud::list(&self.store.read().await.tables)
    }

    /// Gets a country by ID.
    pub async fn get_country(&self, id: CountryId) -> AppResult<GeoCountry> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a country.
    pub async fn create_country(
        &self,
        ctx: &RequestContext,
        req: CreateCountry,
    ) -> AppResult<GeoCountry> {
        req.validate()?;

        let mut state = self.store.write().await;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a country.
    pub async fn update_country(
        &self,
        ctx: &RequestContext,
        id: CountryId,
        req: UpdateCountry,
    ) -> AppResult<GeoCountry> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(&mut state, ctx, id, req, rules::unguarded_row, |_, _, _| Ok(()))
    }

    /// Deletes a country without states.
    pub async fn delete_country(&self, ctx: &RequestContext, id: CountryId) -> AppResult<GeoCountry> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::delete_country)
    }

    // -- States --

    /// Lists states, optionally within one country.
    pub async fn list_states(&self, country_id: Option<CountryId>) -> Vec<GeoState> {
        let state = self.store.read().await;
        state
            .tables
            .states
            .iter()
            .filter(|s| country_id.is_none_or(|c| s.country_id == c))
            .cloned()
            .collect()
    }

    /// Gets a state by ID.
    pub async fn get_state(&self, id: StateId) -> AppResult<GeoState> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a state inside an existing country.
    pub async fn create_state(&self, ctx: &RequestContext, req: CreateState) -> AppResult<GeoState> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::require::<GeoCountry>(&state.tables, req.country_id, "country_id")?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a state.
    pub async fn update_state(
        &self,
        ctx: &RequestContext,
        id: StateId,
        req: UpdateState,
    ) -> AppResult<GeoState> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(&mut state, ctx, id, req, rules::unguarded_row, |tables, before, after| {
            if before.country_id != after.country_id {
                crud::require::<GeoCountry>(tables, after.country_id, "country_id")?;
            }
            Ok(())
        })
    }

    /// Deletes a state without cities.
    pub async fn delete_state(&self, ctx: &RequestContext, id: StateId) -> AppResult<GeoState> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::delete_state)
    }

    // -- Cities --

    /// Lists cities, optionally within one state.
    pub async fn list_cities(&self, state_id: Option<StateId>) -> Vec<GeoCity> {
        let state = self.store.read().await;
        state
            .tables
            .cities
            .iter()
            .filter(|c| state_id.is_none_or(|s| c.state_id == s))
            .cloned()
            .collect()
    }

    /// Gets a city by ID.
    pub async fn get_city(&self, id: CityId) -> AppResult<GeoCity> {
        crud::fetch(&self.store.read().await.tables, id)
    }

    /// Creates a city inside an existing state.
    pub async fn create_city(&self, ctx: &RequestContext, req: CreateCity) -> AppResult<GeoCity> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::require::<GeoState>(&state.tables, req.state_id, "state_id")?;
        Ok(crud::insert(&mut state, ctx, |now| req.into_record(now)))
    }

    /// Updates a city.
    pub async fn update_city(
        &self,
        ctx: &RequestContext,
        id: CityId,
        req: UpdateCity,
    ) -> AppResult<GeoCity> {
        req.validate()?;

        let mut state = self.store.write().await;
        crud::update(&mut state, ctx, id, req, rules::unguarded_row, |tables, before, after| {
            if before.state_id != after.state_id {
                crud::require::<GeoState>(tables, after.state_id, "state_id")?;
            }
            Ok(())
        })
    }

    /// Deletes a city.
    pub async fn delete_city(&self, ctx: &RequestContext, id: CityId) -> AppResult<GeoCity> {
        let mut state = self.store.write().await;
        crud::delete(&mut state, ctx, id, rules::unguarded)
    }
}
