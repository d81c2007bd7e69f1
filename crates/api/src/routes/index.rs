//! Index Route

use axum::response::Html;

const INDEX: &str = concat!(
    "For Last 12 Months Precipitation Data:<br/>",
    "/api/v1.0/precipitation<br/>",
    "For List of All Stations:<br/>",
    "/api/v1.0/stations<br/>",
    "For Last 12 Months Temperature Data:<br/>",
    "/api/v1.0/tobs<br/>",
    "For Minimum, Average, and Maximum Temperature Calculated From Start Point to End of Data:<br/>",
    "Enter a start date with a four number year, two number month and two number day:<br/>",
    "/api/v1.0/&lt;start_date&gt;<br/>",
    "For Minimum, Average, and Maximum Temperature Calculated From Start Point to Specific End Point:<br/>",
    "Enter a start date and end date separated by a forward slash,<br/>",
    "each with a four number year, two number month and two number day:<br/>",
    "/api/v1.0/&lt;start_date&gt;/&lt;end_date&gt;",
);

/// List the available routes
pub async fn index() -> Html<&'static str> {
    Html(INDEX)
}
