mod favorite;
mod server;
mod sync_status;
