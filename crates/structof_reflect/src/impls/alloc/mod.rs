mod boxed;
mod btree_map;
mod sync;
mod vec;
mod vec_deque;
