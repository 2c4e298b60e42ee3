mod hash;
mod mpsc;
mod once_lock;
