//! Prompt templates and response schemas of the two flows.

use serde_json::{Value, json};

use crate::core::{reroute::RerouteRequest, scenario::Conditions};

pub fn predict_disruptions(conditions: &Conditions) -> String {
    format!(
        r#"You are an AI expert in supply chain disruption prediction.
Given the following data, predict potential supply chain disruptions in the next 12-48 hours.
Provide alternative routes for affected shipments with estimated time, cost, and CO2 savings.

When a shipment is affected, you MUST provide its specific location as a latitude,longitude string.
For example, if a hurricane impacts the Port of New Orleans and affects shipment SHP-004 originating there, the location for that affected shipment should be "29.9511,-90.0715".

Weather Data: {weather}
Traffic Data: {traffic}
Port Congestion Data: {port_congestion}
Infrastructure Health Data: {infrastructure_health}

Format your response as a JSON array of disruptions, including type, location, start time, end time, severity, affected shipments and alternative routes."#,
        weather = conditions.weather,
        traffic = conditions.traffic,
        port_congestion = conditions.port_congestion,
        infrastructure_health = conditions.infrastructure_health,
    )
}

pub fn calculate_optimal_rerouting(request: &RerouteRequest) -> String {
    format!(
        r"You are an expert logistics planner tasked with rerouting a shipment given a disruption.

Shipment Details: {shipment_details}
Disruption Forecast: {disruption_forecast}

Considering the following constraints:
Cost Importance: {cost}
Time Importance: {time}
Sustainability Importance: {sustainability}

Calculate the optimal route, taking into account cost, time, and sustainability. Provide a detailed description of the optimal route, including waypoints and transportation modes. Also provide the estimated cost, time, and CO2 emissions for the route.

Also, summarize alternative routes considered, and the reason they were not selected.",
        shipment_details = request.shipment_details,
        disruption_forecast = request.disruption_forecast,
        cost = request.constraints.cost,
        time = request.constraints.time,
        sustainability = request.constraints.sustainability,
    )
}

pub fn forecast_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "disruptions": {
                "type": "ARRAY",
                "description": "A list of predicted supply chain disruptions.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "type": {
                            "type": "STRING",
                            "description": "The type of disruption (e.g., weather, congestion).",
                        },
                        "location": {
                            "type": "STRING",
                            "description": "The general location of the disruption (e.g. New Orleans, LA).",
                        },
                        "startTime": {
                            "type": "STRING",
                            "description": "The predicted start time of the disruption.",
                        },
                        "endTime": {
                            "type": "STRING",
                            "description": "The predicted end time of the disruption.",
                        },
                        "severity": {
                            "type": "STRING",
                            "description": "The severity of the disruption (e.g., low, medium, high).",
                        },
                        "affectedShipments": {
                            "type": "ARRAY",
                            "description": "List of affected shipments and their specific locations.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "shipmentId": {
                                        "type": "STRING",
                                        "description": "The ID of the affected shipment.",
                                    },
                                    "location": {
                                        "type": "STRING",
                                        "description": "The specific latitude,longitude of the affected port or shipment's origin (e.g. 29.9511,-90.0715).",
                                    },
                                },
                                "required": ["shipmentId", "location"],
                            },
                        },
                        "alternativeRoutes": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "route": {
                                        "type": "STRING",
                                        "description": "Alternative route description.",
                                    },
                                    "estimatedTimeSavings": {
                                        "type": "NUMBER",
                                        "description": "Estimated time savings in hours.",
                                    },
                                    "estimatedCostSavings": {
                                        "type": "NUMBER",
                                        "description": "Estimated cost savings in USD.",
                                    },
                                    "estimatedCo2Reduction": {
                                        "type": "NUMBER",
                                        "description": "Estimated CO2 reduction in kg.",
                                    },
                                },
                                "required": [
                                    "route",
                                    "estimatedTimeSavings",
                                    "estimatedCostSavings",
                                    "estimatedCo2Reduction",
                                ],
                            },
                        },
                    },
                    "required": [
                        "type",
                        "location",
                        "startTime",
                        "endTime",
                        "severity",
                        "affectedShipments",
                        "alternativeRoutes",
                    ],
                },
            },
        },
        "required": ["disruptions"],
    })
}

pub fn reroute_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "optimalRoute": {
                "type": "STRING",
                "description": "A description of the optimal route, including waypoints and transportation modes.",
            },
            "estimatedCost": {
                "type": "NUMBER",
                "description": "The estimated cost of the optimal route.",
            },
            "estimatedTime": {
                "type": "NUMBER",
                "description": "The estimated time of the optimal route.",
            },
            "estimatedCO2Emissions": {
                "type": "NUMBER",
                "description": "The estimated CO2 emissions of the optimal route.",
            },
            "alternatives": {
                "type": "ARRAY",
                "description": "A summary of alternative routes considered, and the reason they were not selected.",
                "items": { "type": "STRING" },
            },
        },
        "required": [
            "optimalRoute",
            "estimatedCost",
            "estimatedTime",
            "estimatedCO2Emissions",
            "alternatives",
        ],
    })
}
