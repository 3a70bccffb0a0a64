// Client-side route table
//
// Static mapping from URL paths to page-level views: a login page at the
// root and the main layout's nested children, one of which carries a
// dynamic device-id segment. No guards, no redirects.

/// Page-level views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    DeviceCenter,
    MonitorCenter,
    DataSimulation,
    AlertSystem,
    ReportSystem,
}

/// A resolved route: the view plus its navigation tag and any captured
/// device id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: View,
    pub nav_id: Option<&'static str>,
    pub device_id: Option<i64>,
}

impl RouteMatch {
    fn plain(view: View, nav_id: Option<&'static str>) -> Self {
        Self { view, nav_id, device_id: None }
    }
}

/// Resolve a path against the route table. Trailing slashes are tolerated;
/// a non-numeric device segment does not match.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };

    match path {
        "/" => Some(RouteMatch::plain(View::Login, None)),
        "/main/device-center" => Some(RouteMatch::plain(View::DeviceCenter, Some("devices"))),
        "/main/data-simulation" => Some(RouteMatch::plain(View::DataSimulation, Some("simulation"))),
        "/main/alert-system" => Some(RouteMatch::plain(View::AlertSystem, Some("alert"))),
        "/main/report-system" => Some(RouteMatch::plain(View::ReportSystem, Some("report"))),
        _ => {
            let segment = path.strip_prefix("/main/monitor/")?;
            let device_id = segment.parse::<i64>().ok()?;
            Some(RouteMatch {
                view: View::MonitorCenter,
                nav_id: Some("monitor"),
                device_id: Some(device_id),
            })
        }
    }
}
