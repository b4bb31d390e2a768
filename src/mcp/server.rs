use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use anyhow::Result;
use log::info;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use super::helpers::{self, json_result};
use super::types::{
    AnnotateFileParams, AnnotateTextParams, ConfigDto, ConfigValues, GetConfigParams,
    LookupKeyParams, LookupResult, StoreStatus,
};
use crate::cli::{args::CommonArgs, commands::AnnotationContext};

/// One loaded project per root path. Translation tables are loaded on first
/// use and kept for the rest of the session.
type ProjectCache = Arc<Mutex<HashMap<PathBuf, Arc<AnnotationContext>>>>;

#[derive(Clone)]
pub struct KeylensMcpServer {
    tool_router: ToolRouter<Self>,
    projects: ProjectCache,
}

impl Default for KeylensMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl KeylensMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            projects: Arc::default(),
        }
    }

    fn project(&self, project_root_path: &str) -> Result<Arc<AnnotationContext>, McpError> {
        let root = PathBuf::from(project_root_path);
        if !root.is_dir() {
            return Err(McpError::invalid_params(
                format!("Project root is not a directory: {}", project_root_path),
                None,
            ));
        }

        let mut projects = self
            .projects
            .lock()
            .map_err(|_| McpError::internal_error("Project cache is poisoned", None))?;
        if let Some(ctx) = projects.get(&root) {
            return Ok(Arc::clone(ctx));
        }

        let ctx = AnnotationContext::with_working_dir(&CommonArgs::default(), root.clone())
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;
        info!(
            "Loaded project {} ({} translation keys)",
            root.display(),
            ctx.store.len()
        );
        let ctx = Arc::new(ctx);
        projects.insert(root, Arc::clone(&ctx));
        Ok(ctx)
    }

    /// Resolve a single translation key
    #[tool(
        description = "Resolve one dotted translation key (e.g. ERROR.NOT_FOUND) against the project's translation file."
    )]
    pub async fn lookup_key(
        &self,
        params: Parameters<LookupKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.project(&params.0.project_root_path)?;
        let key = params.0.key;

        let value = ctx
            .store
            .lookup(&key)
            .filter(|v| !v.is_empty())
            .map(|v| v.into_owned());

        json_result(&LookupResult {
            found: value.is_some(),
            key,
            value,
        })
    }

    /// Annotate a block of source text
    #[tool(
        description = "Find quoted uppercase translation keys in the given text and return their translation values with positions."
    )]
    pub async fn annotate_text(
        &self,
        params: Parameters<AnnotateTextParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.project(&params.0.project_root_path)?;
        let mode = params.0.mode.unwrap_or(ctx.display_mode());

        let result = helpers::annotate_text(&ctx, "<text>", &params.0.text, mode);
        json_result(&result)
    }

    /// Annotate a source file of the project
    #[tool(
        description = "Find quoted uppercase translation keys in a project file and return their translation values with positions."
    )]
    pub async fn annotate_file(
        &self,
        params: Parameters<AnnotateFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.project(&params.0.project_root_path)?;
        let mode = params.0.mode.unwrap_or(ctx.display_mode());

        let path = ctx.resolve_path(Path::new(&params.0.file_path));
        let text = fs::read_to_string(&path).map_err(|e| {
            McpError::invalid_params(
                format!("Failed to read file {}: {}", path.display(), e),
                None,
            )
        })?;

        let result = helpers::annotate_text(&ctx, &ctx.display_path(&path), &text, mode);
        json_result(&result)
    }

    /// Get the effective keylens configuration
    #[tool(
        description = "Get the effective keylens configuration and whether the translation file loaded."
    )]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = self.project(&params.0.project_root_path)?;

        let config_dto = ConfigDto {
            from_file: ctx.from_file,
            project_root: ctx.project_root.to_string_lossy().into_owned(),
            config: ConfigValues::from(ctx.config.clone()),
            store: StoreStatus {
                loaded: ctx.store.source().is_some(),
                source: ctx.store.source().map(|p| p.to_string_lossy().into_owned()),
                key_count: ctx.store.len(),
            },
        };
        json_result(&config_dto)
    }
}

#[tool_handler]
impl ServerHandler for KeylensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "keylens MCP shows the human-readable values of translation keys such as \
                 \"ERROR.NOT_FOUND\" used in source code.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration and translation file status\n\
                 2. lookup_key - Resolve one dotted translation key\n\
                 3. annotate_text - Resolve every quoted uppercase key in a block of text\n\
                 4. annotate_file - Resolve every quoted uppercase key in a project file\n\n\
                 Keys without a translation are omitted from annotation results. The \
                 translation file is loaded once per project and not reloaded."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    // Tool results are read by agents, not terminals.
    colored::control::set_override(false);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = KeylensMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
