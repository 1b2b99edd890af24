// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Configuration and logging
pub mod config;
pub mod logging;

// Collaborators: assistant (NLU) and property data lookups
pub mod assistant;
pub mod lookup;

// Response formatting
pub mod formatter;
