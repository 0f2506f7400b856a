pub type SearchResult<T> = Result<T, SearchError>;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("suggestion lookup failed: {context}")]
    Network {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        context: String,
    },
    #[error("unexpected suggestion payload: {context}")]
    Parse { context: String },
    #[error("settings persistence failed: {context}")]
    Persistence {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        context: String,
    },
    #[error("workspace request failed: {0}")]
    Workspace(String),
}

impl SearchError {
    pub fn network(
        source: impl std::error::Error + Send + Sync + 'static,
        context: impl Into<String>,
    ) -> Self {
        Self::Network {
            source: Box::new(source),
            context: context.into(),
        }
    }

    pub fn parse(context: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
        }
    }

    pub fn persistence(
        source: impl std::error::Error + Send + Sync + 'static,
        context: impl Into<String>,
    ) -> Self {
        Self::Persistence {
            source: Box::new(source),
            context: context.into(),
        }
    }

    pub fn workspace(message: impl Into<String>) -> Self {
        Self::Workspace(message.into())
    }
}
