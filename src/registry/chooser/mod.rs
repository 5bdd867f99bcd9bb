use rand::Rng;

use crate::api::error::Error::NoAvailableEndpoint;
use crate::api::error::Result;
use crate::api::model::Endpoint;
use crate::api::registry::EndpointChooser;

/// Uniform random choice; registry endpoints carry no weight.
#[derive(Debug)]
pub(crate) struct RandomEndpointChooser {
    items: Vec<Endpoint>,
}

impl RandomEndpointChooser {
    pub fn new(service_name: String, items: Vec<Endpoint>) -> Result<Self> {
        if items.is_empty() {
            return Err(NoAvailableEndpoint(service_name));
        }
        Ok(RandomEndpointChooser { items })
    }
}

impl EndpointChooser for RandomEndpointChooser {
    fn choose(mut self) -> Option<Endpoint> {
        if self.items.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..self.items.len());
        Some(self.items.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEndpointChooser;
    use crate::api::error::Error;
    use crate::api::model::Endpoint;
    use crate::api::registry::EndpointChooser;

    fn endpoint(instance_id: &str) -> Endpoint {
        Endpoint {
            instance_id: Some(instance_id.to_string()),
            endpoint: Some(format!("{instance_id}:8080")),
        }
    }

    #[test]
    fn test_empty_is_an_error() {
        let err = RandomEndpointChooser::new("app".to_string(), Vec::new()).unwrap_err();
        assert!(matches!(err, Error::NoAvailableEndpoint(service) if service == "app"));
    }

    #[test]
    fn test_single_item_is_chosen() {
        let chooser =
            RandomEndpointChooser::new("app".to_string(), vec![endpoint("only")]).unwrap();
        let chosen = chooser.choose().unwrap();
        assert_eq!(chosen.instance_id(), Some(&"only".to_string()));
    }

    #[test]
    fn test_choice_comes_from_items() {
        let items = vec![endpoint("a"), endpoint("b"), endpoint("c")];
        let chooser = RandomEndpointChooser::new("app".to_string(), items.clone()).unwrap();
        let chosen = chooser.choose().unwrap();
        assert!(items.iter().any(|item| item.is_same_endpoint(&chosen)));
    }
}
