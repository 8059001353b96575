/// Barva odznaku podle health statusu (zelená / oranžová / červená / šedá)
pub fn health_status_color(status: Option<&str>) -> &'static str {
    let Some(status) = status else {
        return "#626976";
    };

    match status.to_ascii_lowercase().as_str() {
        "healthy" | "ok" | "up" | "green" => "#2fb344",
        "degraded" | "warning" | "yellow" => "#f59f00",
        "unhealthy" | "down" | "error" | "red" => "#d63939",
        _ => "#626976", // šedá pro neznámé stavy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_color() {
        assert_eq!(health_status_color(Some("healthy")), "#2fb344");
        assert_eq!(health_status_color(Some("OK")), "#2fb344");
        assert_eq!(health_status_color(Some("degraded")), "#f59f00");
        assert_eq!(health_status_color(Some("Down")), "#d63939");
        assert_eq!(health_status_color(Some("rebooting")), "#626976");
        assert_eq!(health_status_color(None), "#626976");
    }
}
