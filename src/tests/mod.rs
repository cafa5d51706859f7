mod primitive;
mod stress;
