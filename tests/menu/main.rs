mod app;
mod common;
mod router;
