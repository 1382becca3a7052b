// Built-in PlantUML samples offered by the example shortcuts

use std::fmt;
use std::str::FromStr;

/// Key of a built-in example
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleKind {
    Sequence,
    Class,
    UseCase,
    Activity,
}

impl ExampleKind {
    pub const ALL: [ExampleKind; 4] = [
        ExampleKind::Sequence,
        ExampleKind::Class,
        ExampleKind::UseCase,
        ExampleKind::Activity,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ExampleKind::Sequence => "sequence",
            ExampleKind::Class => "class",
            ExampleKind::UseCase => "usecase",
            ExampleKind::Activity => "activity",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ExampleKind::Sequence => "Sequence Diagram",
            ExampleKind::Class => "Class Diagram",
            ExampleKind::UseCase => "Use Case Diagram",
            ExampleKind::Activity => "Activity Diagram",
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            ExampleKind::Sequence => SEQUENCE,
            ExampleKind::Class => CLASS,
            ExampleKind::UseCase => USE_CASE,
            ExampleKind::Activity => ACTIVITY,
        }
    }
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown example: {0}")]
pub struct ParseExampleError(pub String);

impl FromStr for ExampleKind {
    type Err = ParseExampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExampleKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseExampleError(s.to_string()))
    }
}

const SEQUENCE: &str = r#"@startuml
!theme plain
title Order Processing Flow

actor Customer as Customer
participant "E-commerce Website" as Web
participant "Order System" as Order
participant "Inventory System" as Inventory
participant "Payment System" as Payment

Customer -> Web: Place order
Web -> Order: Create order
Order -> Inventory: Check stock

alt Stock available
    Inventory --> Order: Stock confirmed
    Order -> Payment: Process payment

    alt Payment successful
        Payment --> Order: Payment confirmed
        Order -> Inventory: Deduct stock
        Order --> Web: Order success
        Web --> Customer: Order confirmation
    else Payment failed
        Payment --> Order: Payment failed
        Order --> Web: Order failed
        Web --> Customer: Payment error
    end

else Out of stock
    Inventory --> Order: Out of stock
    Order --> Web: Item unavailable
    Web --> Customer: Out of stock notice
end

@enduml"#;

const CLASS: &str = r#"@startuml
!theme plain
title E-commerce System Class Diagram

class User {
    -userId: String
    -username: String
    -email: String
    -password: String
    +login(): boolean
    +logout(): void
    +updateProfile(): void
}

class Product {
    -productId: String
    -name: String
    -price: BigDecimal
    -stock: int
    -description: String
    +updateStock(quantity: int): void
    +getPrice(): BigDecimal
}

class Order {
    -orderId: String
    -orderDate: Date
    -status: OrderStatus
    -totalAmount: BigDecimal
    +addItem(product: Product, quantity: int): void
    +calculateTotal(): BigDecimal
    +updateStatus(status: OrderStatus): void
}

class OrderItem {
    -quantity: int
    -unitPrice: BigDecimal
    +getSubtotal(): BigDecimal
}

enum OrderStatus {
    PENDING
    CONFIRMED
    SHIPPED
    DELIVERED
    CANCELLED
}

User ||--o{ Order : places
Order ||--o{ OrderItem : contains
OrderItem }o--|| Product : references
Order ||--|| OrderStatus : has

@enduml"#;

const USE_CASE: &str = r#"@startuml
!theme plain
title Online Learning System Use Cases

left to right direction

actor Student as Student
actor Teacher as Teacher
actor Admin as Admin

rectangle "Online Learning System" {

    rectangle "Student Features" {
        Student -- (Register Account)
        Student -- (Browse Courses)
        Student -- (Purchase Course)
        Student -- (Watch Videos)
        Student -- (Download Materials)
        Student -- (Join Discussions)
        Student -- (Submit Assignment)
    }

    rectangle "Teacher Features" {
        Teacher -- (Upload Course)
        Teacher -- (Edit Course Content)
        Teacher -- (Grade Assignments)
        Teacher -- (Reply to Discussions)
        Teacher -- (View Learning Statistics)
    }

    rectangle "Admin Features" {
        Admin -- (Manage Users)
        Admin -- (Review Courses)
        Admin -- (System Settings)
        Admin -- (Generate Reports)
    }

    (Purchase Course) ..> (Register Account) : <<include>>
    (Watch Videos) ..> (Purchase Course) : <<include>>
    (Submit Assignment) ..> (Watch Videos) : <<extend>>
}

@enduml"#;

const ACTIVITY: &str = r#"@startuml
!theme plain
title Customer Support Ticket Handling Process

start

:Receive customer ticket;
:Auto-categorize ticket;

if (Urgent ticket?) then (Yes)
    :Immediately notify on-call staff;
else (No)
endif

:Assign to appropriate support staff;
:Support staff starts handling;

repeat
    :Analyze issue;
    :Provide solution;
    :Communicate with customer;

    if (Issue resolved?) then (Yes)
        :Mark ticket as resolved;
        break
    else (No)
        if (Need escalation?) then (Yes)
            :Escalate to senior support;
        else (No)
        endif
    endif
repeat while (Continue handling?)

:Customer confirms satisfaction;

if (Customer satisfied?) then (Yes)
    :Close ticket;
else (No)
    :Reopen ticket;
    backward :Support staff starts handling;
endif

:Record resolution;
:Update knowledge base;

stop

@enduml"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_example_is_a_complete_diagram() {
        for kind in ExampleKind::ALL {
            let source = kind.source();
            assert!(source.starts_with("@startuml"), "{kind} missing @startuml");
            assert!(source.trim_end().ends_with("@enduml"), "{kind} missing @enduml");
            assert_eq!(source.matches("@startuml").count(), 1);
        }
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("usecase".parse::<ExampleKind>(), Ok(ExampleKind::UseCase));
        assert_eq!("Activity".parse::<ExampleKind>(), Ok(ExampleKind::Activity));
        assert!("gantt".parse::<ExampleKind>().is_err());
    }
}
