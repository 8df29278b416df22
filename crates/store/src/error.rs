use thiserror::Error;

/// Errors raised while applying the bootstrap against the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to document store at '{uri}'")]
    Connect {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("failed to provision user '{username}'")]
    Provision {
        username: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("malformed reply to '{command}' command")]
    Reply {
        command: &'static str,
        #[source]
        source: mongodb::bson::document::ValueAccessError,
    },

    #[error("failed to list collections")]
    ListCollections {
        #[source]
        source: mongodb::error::Error,
    },

    #[error("failed to create collection '{collection}'")]
    Collection {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("failed to seed collection '{collection}'")]
    Seed {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    #[error("failed to create indexes for collection '{collection}'")]
    Index {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::document::ValueAccessError;

    #[test]
    fn reply_error_names_the_command() {
        let err = StoreError::Reply {
            command: "usersInfo",
            source: ValueAccessError::NotPresent,
        };
        assert_eq!(err.to_string(), "malformed reply to 'usersInfo' command");
    }
}
