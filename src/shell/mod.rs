// Composition root for the delivery log service.
//
// Responsibilities
// - Instantiate concrete infrastructure implementations from the config.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and the GraphQL schema over the same handlers.

pub mod graphql;
pub mod http;
pub mod state;
