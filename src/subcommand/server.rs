use {
  self::error::ServerResult,
  super::*,
  crate::templates::{ItemsHtml, PageContent, PageHtml, PaginationHtml},
  axum::{
    extract::{Extension, Json, Path, Query},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
  },
  axum_server::Handle,
  std::net::ToSocketAddrs,
  tower_http::compression::CompressionLayer,
};

mod error;

const ITEMS_ROUTE: &str = "items";

#[derive(Debug)]
struct ServerConfig {
  paginator: Paginator,
  routes: Routes,
  window: Window,
}

#[derive(Deserialize)]
struct PageQuery {
  page: Option<u32>,
}

#[derive(Debug, Parser, Clone)]
pub struct Server {
  #[arg(
    long,
    help = "Listen on <ADDRESS> for incoming requests. [default: 0.0.0.0]"
  )]
  pub(crate) address: Option<String>,
  #[arg(
    long,
    default_value_t = 80,
    help = "Listen on <HTTP_PORT> for incoming HTTP requests."
  )]
  pub(crate) http_port: u16,
  #[arg(long, default_value_t = 1000, help = "List <ITEMS> demo items.")]
  pub(crate) items: u64,
  #[arg(long, default_value_t = 10, help = "Show <PER_PAGE> items on each page.")]
  pub(crate) per_page: u32,
}

impl Server {
  pub fn run(self, settings: Settings, handle: Handle) -> SubcommandResult {
    Runtime::new()?.block_on(async {
      let server_config = Arc::new(ServerConfig {
        paginator: Paginator::new(self.items, self.per_page)?,
        routes: Routes::new().with(ITEMS_ROUTE, "/items/:page")?,
        window: settings.window(),
      });

      log::info!(
        "serving {} items in {} pages with {:?}",
        self.items,
        server_config.paginator.num_pages(),
        server_config.window,
      );

      let router = Router::new()
        .route("/", get(Self::home))
        .route("/items", get(Self::items_query))
        .route("/items/:page", get(Self::items))
        .route("/pages/:total/:current", get(Self::pages))
        .layer(Extension(server_config))
        .layer(CompressionLayer::new());

      self.spawn(router, handle)?.await??;

      Ok(None)
    })
  }

  fn spawn(
    &self,
    router: Router,
    handle: Handle,
  ) -> Result<tokio::task::JoinHandle<io::Result<()>>> {
    let address = match &self.address {
      Some(address) => address.as_str(),
      None => {
        if cfg!(test) {
          "127.0.0.1"
        } else {
          "0.0.0.0"
        }
      }
    };

    let addr = (address, self.http_port)
      .to_socket_addrs()?
      .next()
      .ok_or_else(|| anyhow!("failed to get socket addrs"))?;

    if !cfg!(test) {
      eprintln!("Listening on http://{addr}");
    }

    Ok(tokio::spawn(async move {
      axum_server::Server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    }))
  }

  async fn home() -> Redirect {
    Redirect::to("/items/1")
  }

  async fn items(
    Extension(server_config): Extension<Arc<ServerConfig>>,
    Path(number): Path<u32>,
  ) -> ServerResult<PageHtml<ItemsHtml>> {
    let page = server_config.paginator.page(number)?;

    let partial = PartialUrl::new(ITEMS_ROUTE);

    let pagination = PaginationHtml::new(
      page,
      server_config.window,
      &BoundUrl {
        routes: &server_config.routes,
        partial: &partial,
      },
    )?;

    Ok(ItemsHtml::new(page, pagination).page())
  }

  async fn items_query(
    Extension(server_config): Extension<Arc<ServerConfig>>,
    Query(query): Query<PageQuery>,
  ) -> ServerResult<PageHtml<ItemsHtml>> {
    let page = server_config.paginator.page(query.page.unwrap_or(1))?;

    let pagination = PaginationHtml::new(page, server_config.window, &QueryString)?;

    Ok(ItemsHtml::new(page, pagination).page())
  }

  async fn pages(
    Extension(server_config): Extension<Arc<ServerConfig>>,
    Path((total, current)): Path<(u32, u32)>,
  ) -> ServerResult<Json<pages::Output>> {
    let window = server_config.window;

    let entries = window.entries(total, current)?;

    Ok(Json(pages::Output {
      max_distance: window.max_distance.n(),
      contiguous: window.contiguous,
      links: PageLink::links(&entries, &QueryString)?,
    }))
  }
}
