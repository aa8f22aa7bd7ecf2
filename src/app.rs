//! Command dispatch: each subcommand drives one [`ListScreen`] action.

use clap::{ArgAction, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use flora_admin::model::{
    BlogPost, Category, ContactInfo, ContactMessage, ContactSubject, Faq, Order, Product,
    Reservation, ServiceOffering, Subscription, Testimonial, User,
};
use flora_admin::notify::Level;
use flora_admin::user_config::ReorderConfig;
use flora_admin::utils::render_table;
use flora_admin::{
    ActionOutcome, ApiClient, Direction, Featurable, HasStatus, ListScreen, NotificationCenter,
    Notifier, Orderable, ReorderGate, Resource, ResourceService, SwapPersistence,
};

/// Back-office lists reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Categories,
    Products,
    Services,
    Orders,
    Reservations,
    Subscriptions,
    BlogPosts,
    Testimonials,
    ContactInfo,
    ContactSubjects,
    ContactMessages,
    Faqs,
    Users,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Store the bearer token sent with every request
    Login {
        #[arg(long)]
        token: String,
    },
    /// Forget the stored token
    Logout,
    /// Toggle the collapsed-sidebar preference
    Sidebar,
    /// Show a list as a table
    List {
        entity: EntityKind,
        /// Filter on one column, e.g. `--search question=livraison`
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one row as JSON
    Get { entity: EntityKind, id: String },
    /// Create a row from JSON fields
    Create {
        entity: EntityKind,
        #[arg(long)]
        json: String,
    },
    /// Change fields of a row; fields not given keep their value
    Update {
        entity: EntityKind,
        id: String,
        #[arg(long)]
        json: String,
    },
    /// Delete a row (requires --yes)
    Delete {
        entity: EntityKind,
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Set the status of an order, reservation, subscription or message
    Status {
        entity: EntityKind,
        id: String,
        value: String,
    },
    /// Feature or unfeature a product, service, blog post or testimonial
    Feature {
        entity: EntityKind,
        id: String,
        #[arg(action = ArgAction::Set)]
        featured: bool,
    },
    /// Move a contact info line, contact subject or FAQ up or down
    Move {
        entity: EntityKind,
        id: String,
        direction: Direction,
    },
}

/// Run `$method::<Entity>(args)` for any entity kind.
macro_rules! for_entity {
    ($app:ident, $kind:expr, $method:ident($($arg:expr),*)) => {
        match $kind {
            EntityKind::Categories => $app.$method::<Category>($($arg),*).await,
            EntityKind::Products => $app.$method::<Product>($($arg),*).await,
            EntityKind::Services => $app.$method::<ServiceOffering>($($arg),*).await,
            EntityKind::Orders => $app.$method::<Order>($($arg),*).await,
            EntityKind::Reservations => $app.$method::<Reservation>($($arg),*).await,
            EntityKind::Subscriptions => $app.$method::<Subscription>($($arg),*).await,
            EntityKind::BlogPosts => $app.$method::<BlogPost>($($arg),*).await,
            EntityKind::Testimonials => $app.$method::<Testimonial>($($arg),*).await,
            EntityKind::ContactInfo => $app.$method::<ContactInfo>($($arg),*).await,
            EntityKind::ContactSubjects => $app.$method::<ContactSubject>($($arg),*).await,
            EntityKind::ContactMessages => $app.$method::<ContactMessage>($($arg),*).await,
            EntityKind::Faqs => $app.$method::<Faq>($($arg),*).await,
            EntityKind::Users => $app.$method::<User>($($arg),*).await,
        }
    };
}

pub struct App {
    client: ApiClient,
    notifier: Arc<NotificationCenter>,
    gate: Arc<ReorderGate>,
    persistence: SwapPersistence,
}

impl App {
    pub fn new(client: ApiClient, reorder: ReorderConfig) -> Self {
        Self {
            client,
            notifier: Arc::new(NotificationCenter::new()),
            gate: Arc::new(ReorderGate::new(reorder.busy_policy)),
            persistence: reorder.swap_persistence,
        }
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Login { token } => {
                self.client.session().login(&token).await?;
                println!("Signed in");
                Ok(())
            }
            Command::Logout => {
                self.client.session().logout().await?;
                println!("Signed out");
                Ok(())
            }
            Command::Sidebar => {
                let collapsed = self.client.session().toggle_sidebar().await?;
                println!("Sidebar {}", if collapsed { "collapsed" } else { "expanded" });
                Ok(())
            }
            Command::List { entity, search } => for_entity!(self, entity, list(search.as_deref())),
            Command::Get { entity, id } => for_entity!(self, entity, get(&id)),
            Command::Create { entity, json } => for_entity!(self, entity, create(&json)),
            Command::Update { entity, id, json } => for_entity!(self, entity, update(&id, &json)),
            Command::Delete { entity, id, yes } => {
                if !yes {
                    bail!("Refusing to delete {entity} {id} without --yes");
                }
                for_entity!(self, entity, delete(&id))
            }
            Command::Status { entity, id, value } => match entity {
                EntityKind::Orders => self.status::<Order>(&id, &value).await,
                EntityKind::Reservations => self.status::<Reservation>(&id, &value).await,
                EntityKind::Subscriptions => self.status::<Subscription>(&id, &value).await,
                EntityKind::ContactMessages => self.status::<ContactMessage>(&id, &value).await,
                other => bail!("{other} have no status"),
            },
            Command::Feature { entity, id, featured } => match entity {
                EntityKind::Products => self.feature::<Product>(&id, featured).await,
                EntityKind::Services => self.feature::<ServiceOffering>(&id, featured).await,
                EntityKind::BlogPosts => self.feature::<BlogPost>(&id, featured).await,
                EntityKind::Testimonials => self.feature::<Testimonial>(&id, featured).await,
                other => bail!("{other} cannot be featured"),
            },
            Command::Move { entity, id, direction } => match entity {
                EntityKind::ContactInfo => self.move_row::<ContactInfo>(&id, direction).await,
                EntityKind::ContactSubjects => self.move_row::<ContactSubject>(&id, direction).await,
                EntityKind::Faqs => self.move_row::<Faq>(&id, direction).await,
                other => bail!("{other} are not manually ordered"),
            },
        }
    }

    fn screen<E: Resource>(&self) -> ListScreen<E> {
        let notifier: Arc<dyn Notifier> = self.notifier.clone();
        ListScreen::new(self.client.clone(), notifier)
            .with_reorder(Arc::clone(&self.gate), self.persistence)
    }

    /// A screen with its rows loaded.
    async fn loaded_screen<E: Resource>(&self) -> Result<ListScreen<E>> {
        let screen = self.screen::<E>();
        self.settle(screen.refresh().await)?;
        Ok(screen)
    }

    async fn list<E: Resource>(&self, search: Option<&str>) -> Result<()> {
        let screen = self.loaded_screen::<E>().await?;
        if let Some(filter) = search {
            let (column, text) = filter
                .split_once('=')
                .ok_or_else(|| eyre!("--search expects column=text"))?;
            if !screen.set_search(column.trim(), text).await {
                bail!("Unknown column '{column}'. Columns: {}", E::COLUMNS.join(", "));
            }
        }
        let rows: Vec<Vec<String>> = screen.visible_rows().await.iter().map(Resource::row).collect();
        print!("{}", render_table(E::COLUMNS, &rows));
        Ok(())
    }

    async fn get<E: Resource>(&self, id: &str) -> Result<()> {
        let id = parse_id::<E>(id)?;
        let service = ResourceService::<E>::new(self.client.clone());
        let row = service.get(&id).await?;
        println!("{}", serde_json::to_string_pretty(&row)?);
        Ok(())
    }

    async fn create<E: Resource>(&self, json: &str) -> Result<()> {
        let draft: E::Input = serde_json::from_str(json)
            .wrap_err_with(|| format!("Invalid {} fields", E::LABEL))?;
        let screen = self.loaded_screen::<E>().await?;
        screen.open_create(draft).await;
        self.settle(screen.submit().await)
    }

    async fn update<E: Resource>(&self, id: &str, json: &str) -> Result<()> {
        let id = parse_id::<E>(id)?;
        let Value::Object(changes) = serde_json::from_str::<Value>(json)? else {
            bail!("--json must be an object of fields");
        };
        let screen = self.loaded_screen::<E>().await?;
        if !screen.open_edit(&id).await {
            bail!("No {} with id {id}", E::LABEL);
        }
        let current = screen
            .dialog()
            .await
            .draft()
            .cloned()
            .ok_or_else(|| eyre!("Edit dialog did not open"))?;
        let mut fields = serde_json::to_value(current)?;
        if let Value::Object(map) = &mut fields {
            map.extend(changes);
        }
        let merged: E::Input = serde_json::from_value(fields)
            .wrap_err_with(|| format!("Invalid {} fields", E::LABEL))?;
        screen.edit_draft(move |draft| *draft = merged).await;
        self.settle(screen.submit().await)
    }

    async fn delete<E: Resource>(&self, id: &str) -> Result<()> {
        let id = parse_id::<E>(id)?;
        let screen = self.loaded_screen::<E>().await?;
        if !screen.request_delete(&id).await {
            bail!("No {} with id {id}", E::LABEL);
        }
        self.settle(screen.confirm_delete().await)
    }

    async fn status<E: HasStatus>(&self, id: &str, value: &str) -> Result<()> {
        let id = parse_id::<E>(id)?;
        let status: E::Status = value.parse()?;
        let screen = self.screen::<E>();
        self.settle(screen.set_status(&id, status).await)
    }

    async fn feature<E: Featurable>(&self, id: &str, featured: bool) -> Result<()> {
        let id = parse_id::<E>(id)?;
        let screen = self.screen::<E>();
        self.settle(screen.set_featured(&id, featured).await)
    }

    async fn move_row<E: Orderable>(&self, id: &str, direction: Direction) -> Result<()> {
        let id = parse_id::<E>(id)?;
        let screen = self.loaded_screen::<E>().await?;
        self.settle(screen.move_row(&id, direction).await)
    }

    /// Print pending notifications and turn the outcome into an exit status.
    fn settle(&self, outcome: ActionOutcome) -> Result<()> {
        for notification in self.notifier.drain() {
            match notification.level {
                Level::Success => println!("{}", notification.message),
                Level::Error => eprintln!("{}", notification.message),
            }
        }
        match outcome {
            ActionOutcome::Done => Ok(()),
            ActionOutcome::NoOp => {
                println!("Nothing to do");
                Ok(())
            }
            ActionOutcome::Busy => bail!("Another move on this list is in progress"),
            ActionOutcome::LoginRequired => {
                bail!("Not signed in or session expired. Run `flora-admin login --token <TOKEN>`")
            }
            ActionOutcome::Failed => bail!("Request failed"),
        }
    }
}

fn parse_id<E: Resource>(raw: &str) -> Result<E::Id> {
    raw.trim()
        .parse()
        .map_err(|_| eyre!("Invalid {} id '{raw}'", E::LABEL))
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
