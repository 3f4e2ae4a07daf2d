mod config_loading;
mod corpus_files;
mod poems;
