mod refs;
mod remotes;
