//! Routing table
//!
//! Declarative map from (role, view) to a screen builder. Pairs without an
//! entry resolve to [`Screen::UnderConstruction`], never an error. The table
//! is checked once at startup.

use std::collections::HashMap;

use shared::models::Role;
use shared::navigation::{DataScope, NavItem, OfferKind, Screen, View};
use shared::AppResult;

use super::controller::Session;
use crate::catalog::BrandCatalog;
use crate::core::{Result, ServerError};

/// Inputs a screen builder may bind to
#[derive(Debug, Clone)]
pub struct RouteContext {
    pub role: Role,
    /// Session focus, resolved against the catalog
    pub focused_brand_id: String,
    /// Brand the user administers (brand admins), else the focused brand
    pub own_brand_id: String,
}

type ScreenBuilder = fn(&RouteContext) -> Screen;

/// Sidebar entries per role, in display order
const COMMON_MENU: &[(View, &str)] = &[(View::Dashboard, "Dashboard"), (View::Wallet, "Wallet")];

fn role_menu(role: Role) -> Vec<(View, &'static str)> {
    match role {
        Role::SuperAdmin => vec![
            (View::Brands, "Manage Brands"),
            (View::Customers, "All Customers"),
            (View::Campaigns, "Campaigns"),
            (View::Analytics, "Global Analytics"),
            (View::Settings, "Rules & Tiers"),
            (View::Profile, "My Profile"),
        ],
        Role::BrandAdmin => vec![
            (View::LandingPage, "Edit Landing Page"),
            (View::LandingPageView, "View Live Page"),
            (View::Redemptions, "Redemptions"),
            (View::Customers, "Brand Customers"),
            (View::Analytics, "Performance"),
            (View::Profile, "My Profile"),
        ],
        Role::Customer => vec![
            (View::Subscriptions, "Subscriptions"),
            (View::Vouchers, "My Vouchers"),
            (View::Rewards, "Points & Rewards"),
            (View::BrandDirectory, "Contact Brands"),
            (View::Profile, "My Profile"),
        ],
    }
}

/// Role-aware view router
#[derive(Clone)]
pub struct RouteTable {
    routes: HashMap<(Role, View), ScreenBuilder>,
    menus: HashMap<Role, Vec<NavItem>>,
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes_count", &self.routes.len())
            .field("menus_count", &self.menus.len())
            .finish()
    }
}

impl RouteTable {
    /// Build the default table
    pub fn new() -> Self {
        let mut routes: HashMap<(Role, View), ScreenBuilder> = HashMap::new();

        // ========== Super admin ==========
        routes.insert((Role::SuperAdmin, View::Dashboard), |_| {
            Screen::SuperAdminDashboard
        });
        routes.insert((Role::SuperAdmin, View::Brands), |_| Screen::ManageBrands);
        routes.insert((Role::SuperAdmin, View::LandingPage), |ctx| {
            Screen::LandingPageEditor {
                brand_id: ctx.focused_brand_id.clone(),
            }
        });
        routes.insert((Role::SuperAdmin, View::CreateBrand), |_| Screen::CreateBrand);
        routes.insert((Role::SuperAdmin, View::Customers), |_| Screen::Customers {
            scope: DataScope::Global,
        });
        routes.insert((Role::SuperAdmin, View::Campaigns), |_| Screen::Campaigns);
        routes.insert((Role::SuperAdmin, View::Analytics), |_| Screen::Analytics {
            scope: DataScope::Global,
        });
        routes.insert((Role::SuperAdmin, View::Settings), |_| Screen::Settings);

        // ========== Brand admin ==========
        routes.insert((Role::BrandAdmin, View::Dashboard), |ctx| {
            Screen::BrandAdminDashboard {
                brand_id: ctx.own_brand_id.clone(),
            }
        });
        routes.insert((Role::BrandAdmin, View::LandingPage), |ctx| {
            Screen::LandingPageEditor {
                brand_id: ctx.own_brand_id.clone(),
            }
        });
        routes.insert((Role::BrandAdmin, View::LandingPageView), |ctx| {
            Screen::LandingPagePreview {
                brand_id: ctx.own_brand_id.clone(),
            }
        });
        routes.insert((Role::BrandAdmin, View::Redemptions), |ctx| {
            Screen::Redemptions {
                brand_id: ctx.own_brand_id.clone(),
            }
        });
        routes.insert((Role::BrandAdmin, View::Customers), |ctx| Screen::Customers {
            scope: DataScope::Brand {
                brand_id: ctx.own_brand_id.clone(),
            },
        });
        routes.insert((Role::BrandAdmin, View::Analytics), |ctx| Screen::Analytics {
            scope: DataScope::Brand {
                brand_id: ctx.own_brand_id.clone(),
            },
        });

        // ========== Customer ==========
        routes.insert((Role::Customer, View::Dashboard), |_| {
            Screen::CustomerDashboard
        });
        routes.insert((Role::Customer, View::Subscriptions), |_| Screen::Offers {
            kind: OfferKind::Subscriptions,
        });
        routes.insert((Role::Customer, View::Vouchers), |_| Screen::Offers {
            kind: OfferKind::Vouchers,
        });
        routes.insert((Role::Customer, View::Rewards), |_| Screen::Rewards);
        routes.insert((Role::Customer, View::BrandDirectory), |_| {
            Screen::BrandDirectory
        });

        // ========== Every role ==========
        for role in Role::ALL {
            routes.insert((role, View::Wallet), |ctx| Screen::Wallet { role: ctx.role });
            routes.insert((role, View::Profile), |_| Screen::Profile);
        }

        let menus = Role::ALL
            .into_iter()
            .map(|role| {
                let items = COMMON_MENU
                    .iter()
                    .cloned()
                    .chain(role_menu(role))
                    .map(|(view, label)| NavItem {
                        view,
                        label: label.to_string(),
                    })
                    .collect();
                (role, items)
            })
            .collect();

        Self { routes, menus }
    }

    /// Startup check: every role lands somewhere and every menu item routes
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            if !self.routes.contains_key(&(role, View::Dashboard)) {
                return Err(ServerError::RouteTable(format!(
                    "{} has no dashboard route",
                    role
                )));
            }
            let menu = self.menus.get(&role).ok_or_else(|| {
                ServerError::RouteTable(format!("{} has no sidebar menu", role))
            })?;
            if let Some(item) = menu
                .iter()
                .find(|item| !self.routes.contains_key(&(role, item.view.clone())))
            {
                return Err(ServerError::RouteTable(format!(
                    "menu item {} for {} has no route",
                    item.view, role
                )));
            }
        }
        tracing::debug!(routes = self.routes.len(), "Route table validated");
        Ok(())
    }

    /// Sidebar items for a role
    pub fn menu(&self, role: Role) -> &[NavItem] {
        self.menus.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Screen for a role and view with brand bindings already resolved
    pub fn screen_for(&self, ctx: &RouteContext, view: &View) -> Screen {
        match self.routes.get(&(ctx.role, view.clone())) {
            Some(build) => build(ctx),
            None => Screen::under_construction(view),
        }
    }

    /// Resolve the screen a session should currently show
    pub fn resolve(&self, session: &Session, catalog: &BrandCatalog) -> AppResult<Screen> {
        let focused = catalog.get_or_default(&session.focused_brand_id)?;

        let Some(user) = session.identity.as_ref() else {
            return Ok(Screen::PublicLanding {
                brand_id: focused.id,
            });
        };

        let own_brand_id = match user.brand_id.as_deref() {
            Some(id) if user.role == Role::BrandAdmin => catalog.get_or_default(id)?.id,
            _ => focused.id.clone(),
        };
        let ctx = RouteContext {
            role: user.role,
            focused_brand_id: focused.id,
            own_brand_id,
        };
        Ok(self.screen_for(&ctx, &session.active_view))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
